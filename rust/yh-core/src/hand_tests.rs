use crate::hand::{face_word, Hand, HandError};

fn h(d: [u8; 5]) -> Hand {
    Hand::new(d).unwrap()
}

#[test]
fn sum_adds_all_dice() {
    assert_eq!(h([1, 1, 1, 1, 1]).sum(), 5);
    assert_eq!(h([6, 6, 6, 6, 6]).sum(), 30);
    assert_eq!(h([4, 4, 4, 2, 1]).sum(), 15);
}

#[test]
fn frequency_keeps_first_occurrence_order() {
    assert_eq!(h([2, 2, 3, 3, 3]).frequency(), vec![2, 3]);
    assert_eq!(h([3, 2, 3, 2, 3]).frequency(), vec![3, 2]);
    assert_eq!(h([1, 2, 3, 4, 5]).frequency(), vec![1, 1, 1, 1, 1]);
    assert_eq!(h([5, 5, 5, 5, 5]).frequency(), vec![5]);
    assert_eq!(h([6, 1, 1, 6, 4]).frequency(), vec![2, 2, 1]);
}

#[test]
fn count_value_counts_matching_dice() {
    let hand = h([3, 1, 3, 6, 3]);
    assert_eq!(hand.count_value(3), 3);
    assert_eq!(hand.count_value(1), 1);
    assert_eq!(hand.count_value(2), 0);
    assert_eq!(hand.count_value(6), 1);
}

#[test]
fn distinct_faces_and_runs() {
    assert_eq!(h([1, 2, 3, 4, 5]).distinct_faces(), 5);
    assert_eq!(h([1, 2, 3, 4, 5]).longest_run(), 5);
    assert_eq!(h([1, 2, 3, 4, 6]).longest_run(), 4);
    assert_eq!(h([1, 2, 4, 5, 6]).longest_run(), 3);
    assert_eq!(h([2, 2, 2, 2, 2]).longest_run(), 1);
    assert_eq!(h([6, 5, 4, 3, 3]).longest_run(), 4);
}

#[test]
fn rejects_out_of_range_faces() {
    assert_eq!(
        Hand::new([1, 2, 0, 4, 5]).unwrap_err(),
        HandError::FaceOutOfRange { pos: 2, face: 0 }
    );
    assert_eq!(
        Hand::new([7, 2, 3, 4, 5]).unwrap_err(),
        HandError::FaceOutOfRange { pos: 0, face: 7 }
    );
}

#[test]
fn rejects_wrong_length() {
    let four: &[u8] = &[1, 2, 3, 4];
    let six: &[u8] = &[1, 2, 3, 4, 5, 6];
    let empty: &[u8] = &[];
    assert_eq!(Hand::try_from(four).unwrap_err(), HandError::WrongLength(4));
    assert_eq!(Hand::try_from(six).unwrap_err(), HandError::WrongLength(6));
    assert_eq!(Hand::try_from(empty).unwrap_err(), HandError::WrongLength(0));
}

#[test]
fn parses_common_text_forms() {
    let want = h([1, 2, 3, 4, 5]);
    assert_eq!("1 2 3 4 5".parse::<Hand>().unwrap(), want);
    assert_eq!("1,2,3,4,5".parse::<Hand>().unwrap(), want);
    assert_eq!(" 1, 2,3  4 ,5 ".parse::<Hand>().unwrap(), want);
    assert_eq!("12345".parse::<Hand>().unwrap(), want);
}

#[test]
fn parse_errors_are_reported() {
    assert!(matches!(
        "1 2 x 4 5".parse::<Hand>(),
        Err(HandError::Unparsable(t)) if t == "x"
    ));
    assert_eq!("1 2 3 4".parse::<Hand>().unwrap_err(), HandError::WrongLength(4));
    assert_eq!("123456".parse::<Hand>().unwrap_err(), HandError::WrongLength(6));
    assert_eq!(
        "1 2 3 4 9".parse::<Hand>().unwrap_err(),
        HandError::FaceOutOfRange { pos: 4, face: 9 }
    );
    assert_eq!("".parse::<Hand>().unwrap_err(), HandError::WrongLength(0));
}

#[test]
fn display_and_face_words() {
    assert_eq!(h([6, 5, 4, 3, 2]).to_string(), "[6 5 4 3 2]");
    assert_eq!(face_word(1), Some("one"));
    assert_eq!(face_word(6), Some("six"));
    assert_eq!(face_word(0), None);
    assert_eq!(face_word(7), None);
}

#[test]
fn error_messages_mention_invalid_hand() {
    let e = Hand::new([1, 2, 3, 4, 8]).unwrap_err();
    assert!(e.to_string().starts_with("invalid hand"));
}
