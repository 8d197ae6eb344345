use crate::hand::Hand;
use crate::rule::{Rule, RuleError, StraightMode};

fn h(d: [u8; 5]) -> Hand {
    Hand::new(d).unwrap()
}

fn all_hands() -> Vec<[u8; 5]> {
    let mut out = Vec::with_capacity(7776);
    for a in 1u8..=6 {
        for b in 1u8..=6 {
            for c in 1u8..=6 {
                for d in 1u8..=6 {
                    for e in 1u8..=6 {
                        out.push([a, b, c, d, e]);
                    }
                }
            }
        }
    }
    out
}

fn permutations(d: [u8; 5]) -> Vec<[u8; 5]> {
    fn go(prefix: &mut Vec<u8>, rest: &mut Vec<u8>, out: &mut Vec<[u8; 5]>) {
        if rest.is_empty() {
            out.push([prefix[0], prefix[1], prefix[2], prefix[3], prefix[4]]);
            return;
        }
        for i in 0..rest.len() {
            let x = rest.remove(i);
            prefix.push(x);
            go(prefix, rest, out);
            prefix.pop();
            rest.insert(i, x);
        }
    }
    let mut out = Vec::with_capacity(120);
    go(&mut Vec::new(), &mut d.to_vec(), &mut out);
    out
}

fn every_rule() -> Vec<Rule> {
    let mut rules: Vec<Rule> = (1..=6).map(Rule::total_one_number).collect();
    rules.extend([0, 3, 4, 5].map(Rule::sum_distro));
    rules.push(Rule::full_house(25));
    rules.push(Rule::yahtzee(50));
    for mode in [StraightMode::Consecutive, StraightMode::Legacy] {
        rules.push(Rule::small_straight(30, mode));
        rules.push(Rule::large_straight(40, mode));
    }
    rules
}

#[test]
fn scores_do_not_depend_on_dice_order() {
    let rules = every_rule();
    // One representative per multiset, then every ordering of it.
    for d in all_hands().into_iter().filter(|d| d.windows(2).all(|w| w[0] <= w[1])) {
        let base: Vec<u32> = rules.iter().map(|r| r.evaluate(&h(d))).collect();
        for p in permutations(d) {
            let got: Vec<u32> = rules.iter().map(|r| r.evaluate(&h(p))).collect();
            assert_eq!(got, base, "order dependence for {:?} vs {:?}", p, d);
        }
    }
}

#[test]
fn total_one_number_pays_val_per_matching_die() {
    for val in 1u8..=6 {
        let other = if val == 6 { 1 } else { 6 };
        let rule = Rule::total_one_number(val);
        for k in 0..=5usize {
            let mut d = [other; 5];
            for x in d.iter_mut().take(k) {
                *x = val;
            }
            assert_eq!(rule.evaluate(&h(d)), val as u32 * k as u32, "val={val} k={k}");
        }
    }
}

#[test]
fn sum_distro_needs_enough_of_a_kind() {
    let three = Rule::sum_distro(3);
    assert_eq!(three.evaluate(&h([4, 4, 4, 2, 1])), 15);
    assert_eq!(three.evaluate(&h([4, 4, 2, 2, 1])), 0);
    assert_eq!(three.evaluate(&h([4, 4, 4, 4, 4])), 20);

    let four = Rule::sum_distro(4);
    assert_eq!(four.evaluate(&h([4, 4, 4, 2, 1])), 0);
    assert_eq!(four.evaluate(&h([3, 3, 6, 3, 3])), 18);
}

#[test]
fn chance_is_always_the_sum() {
    let chance = Rule::sum_distro(0);
    for d in all_hands() {
        let hand = h(d);
        assert_eq!(chance.evaluate(&hand), hand.sum());
    }
}

#[test]
fn full_house_needs_exactly_three_and_two() {
    let fh = Rule::full_house(25);
    assert_eq!(fh.evaluate(&h([3, 3, 2, 2, 2])), 25);
    assert_eq!(fh.evaluate(&h([2, 3, 2, 3, 2])), 25);
    assert_eq!(fh.evaluate(&h([3, 3, 3, 3, 2])), 0);
    assert_eq!(fh.evaluate(&h([3, 3, 3, 3, 3])), 0);
    assert_eq!(fh.evaluate(&h([1, 1, 2, 2, 3])), 0);
}

#[test]
fn yahtzee_needs_a_single_distinct_face() {
    let y = Rule::yahtzee(50);
    assert_eq!(y.evaluate(&h([5, 5, 5, 5, 5])), 50);
    assert_eq!(y.evaluate(&h([1, 1, 1, 1, 1])), 50);
    assert_eq!(y.evaluate(&h([5, 5, 5, 5, 4])), 0);
    assert_eq!(y.evaluate(&h([4, 5, 5, 5, 5])), 0);
}

#[test]
fn large_straight_examples() {
    for mode in [StraightMode::Consecutive, StraightMode::Legacy] {
        let ls = Rule::large_straight(40, mode);
        assert_eq!(ls.evaluate(&h([1, 2, 3, 4, 5])), 40, "{mode:?}");
        assert_eq!(ls.evaluate(&h([2, 3, 4, 5, 6])), 40, "{mode:?}");
        assert_eq!(ls.evaluate(&h([6, 4, 2, 5, 3])), 40, "{mode:?}");
        assert_eq!(ls.evaluate(&h([1, 2, 3, 4, 6])), 0, "{mode:?}");
        assert_eq!(ls.evaluate(&h([1, 2, 3, 4, 4])), 0, "{mode:?}");
    }
}

#[test]
fn legacy_large_straight_matches_consecutive_on_every_hand() {
    // Five distinct faces out of six miss exactly one face; lacking 1 or 6
    // means the missing face is at an end, so the rest is a run.
    let legacy = Rule::large_straight(40, StraightMode::Legacy);
    let consecutive = Rule::large_straight(40, StraightMode::Consecutive);
    for d in all_hands() {
        let hand = h(d);
        assert_eq!(legacy.evaluate(&hand), consecutive.evaluate(&hand), "{:?}", d);
    }
}

#[test]
fn small_straight_consecutive_needs_four_in_a_row() {
    let ss = Rule::small_straight(30, StraightMode::Consecutive);
    assert_eq!(ss.evaluate(&h([1, 2, 3, 4, 4])), 30);
    assert_eq!(ss.evaluate(&h([5, 2, 3, 4, 1])), 30);
    assert_eq!(ss.evaluate(&h([3, 4, 5, 6, 1])), 30);
    assert_eq!(ss.evaluate(&h([2, 3, 4, 5, 5])), 30);
    assert_eq!(ss.evaluate(&h([2, 3, 4, 5, 6])), 30);

    assert_eq!(ss.evaluate(&h([1, 2, 3, 5, 6])), 0);
    assert_eq!(ss.evaluate(&h([5, 5, 5, 5, 5])), 0);
    assert_eq!(ss.evaluate(&h([6, 1, 1, 1, 1])), 0);
}

#[test]
fn small_straight_legacy_pays_for_any_five_or_six() {
    let ss = Rule::small_straight(30, StraightMode::Legacy);
    // Any hand showing a 5 or a 6 scores, run or not.
    assert_eq!(ss.evaluate(&h([5, 1, 1, 1, 1])), 30);
    assert_eq!(ss.evaluate(&h([6, 6, 6, 6, 6])), 30);
    assert_eq!(ss.evaluate(&h([1, 2, 3, 5, 6])), 30);
    // Without 5 or 6 only {1,2,3,4} pays.
    assert_eq!(ss.evaluate(&h([1, 2, 3, 4, 4])), 30);
    assert_eq!(ss.evaluate(&h([1, 1, 2, 2, 3])), 0);
    assert_eq!(ss.evaluate(&h([2, 3, 4, 4, 4])), 0);
}

#[test]
fn small_straight_modes_differ_only_where_legacy_overpays() {
    let legacy = Rule::small_straight(30, StraightMode::Legacy);
    let consecutive = Rule::small_straight(30, StraightMode::Consecutive);
    let mut differing = 0usize;
    for d in all_hands() {
        let hand = h(d);
        let (l, c) = (legacy.evaluate(&hand), consecutive.evaluate(&hand));
        if l != c {
            // Legacy never misses a real straight.
            assert_eq!((l, c), (30, 0), "{:?}", d);
            assert!(hand.has_face(5) || hand.has_face(6), "{:?}", d);
            differing += 1;
        }
    }
    assert!(differing > 0);
}

#[test]
fn evaluation_is_never_negative_and_bounded() {
    let rules = every_rule();
    for d in all_hands() {
        let hand = h(d);
        for r in &rules {
            assert!(r.evaluate(&hand) <= 50, "{:?} on {:?}", r, d);
        }
    }
}

#[test]
fn validate_rejects_meaningless_parameters() {
    assert_eq!(Rule::total_one_number(0).validate(), Err(RuleError::FaceOutOfRange(0)));
    assert_eq!(Rule::total_one_number(7).validate(), Err(RuleError::FaceOutOfRange(7)));
    assert_eq!(Rule::sum_distro(6).validate(), Err(RuleError::CountTooLarge(6)));
    assert_eq!(Rule::sum_distro(0).validate(), Ok(()));
    assert_eq!(Rule::yahtzee(0).validate(), Ok(()));
}
