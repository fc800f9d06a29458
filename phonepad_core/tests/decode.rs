use phonepad_core::{Decoder, KeyMap, ReservedTable, decode};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("2#", "A")]
#[case("33#", "E")]
#[case("222#", "C")]
#[case("7777#", "S")]
#[case("9999#", "Z")]
#[case("0#", " ")]
#[case("1 11 111#", "&'(")]
#[case("20#", "A ")]
#[case("23#", "AD")]
#[case("234567890#", "ADGJMPTW ")]
#[case("4433555 555666#", "HELLO")]
#[case("44 33 555 555 666#", "HELLO")]
#[case("8 44 444 7777 0 444 7777 0 2 0 8 33 7777 8#", "THIS IS A TEST")]
#[case(
    "2 22 222 3 33 333 4 44 444 5 55 555 6 66 666 7 77 777 7777 8 88 888 9 99 999 9999#",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
)]
fn decodes_plain_messages(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(decode(input), expected);
}

#[rstest]
#[case("227*#", "B")]
#[case("2 3*#", "A")]
#[case("2*3#", "D")]
#[case("222 3*33#", "CE")]
#[case("2 22 222 2222*#", "ABC")]
#[case("8 88777444666*664#", "TURING")]
#[case("44 33 555 555 666***43 555 555 666#", "HEGDLLO")]
fn backspace_deletes_after_committing_the_run(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(decode(input), expected);
}

#[rstest]
#[case("*#")]
#[case("2***#")]
#[case("222**#")]
#[case("2223**#")]
fn over_backspacing_leaves_nothing(#[case] input: &str) {
    assert_eq!(decode(input), "");
}

#[test]
fn pauses_collapse() {
    assert_eq!(decode("2 2#"), decode("2  2#"));
    assert_eq!(decode("2  2#"), "AA");
    assert_eq!(decode(" 2#"), "A");
    assert_eq!(decode("   #"), "");
}

#[test]
fn long_runs_wrap_around_the_key() {
    assert_eq!(decode("2222#"), decode("2#"));
    assert_eq!(decode("22222#"), "B");
    assert_eq!(decode("77777#"), "P");
}

#[rstest]
#[case("")]
#[case("222")]
#[case("2 3 4")]
fn missing_terminator_yields_nothing(#[case] input: &str) {
    assert_eq!(decode(input), "");
}

#[test]
fn input_after_the_terminator_is_ignored() {
    assert_eq!(decode("2#33"), "A");
    assert_eq!(decode("44#*#"), "H");
}

#[test]
fn unknown_characters_do_not_split_runs() {
    assert_eq!(decode("2a2#"), "B");
    assert_eq!(decode("x4?4y#"), "H");
}

#[rstest]
#[case("777#", "Camus: the absurd persists in endless cycles")]
#[case("666#", "Dostoevsky: freedom's burden shapes your path")]
#[case("999#", "Nietzsche: will to power fuels your growth")]
fn reserved_literals_short_circuit(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(decode(input), expected);
}

#[test]
fn reserved_literals_need_an_exact_match() {
    assert_eq!(decode("777 #"), "R");
    assert_eq!(decode("7777#"), "S");
}

#[test]
fn predict_without_history() {
    let mut decoder = Decoder::new(KeyMap::default()).unwrap();
    assert_eq!(decoder.decode("AI#"), "Kage predicts: move");
}

#[test]
fn predict_quotes_the_last_decode() {
    let mut decoder = Decoder::new(KeyMap::default()).unwrap();
    decoder.decode("33#");
    assert_eq!(
        decoder.decode("AI#"),
        "Kage predicts: the last input decoded was E"
    );
    decoder.decode("999#");
    assert_eq!(
        decoder.decode("AI#"),
        "Kage predicts: the last input decoded was 999#"
    );
    assert_eq!(decoder.history().len(), 2);
}

#[test]
fn custom_reserved_table() {
    let reserved = ReservedTable::empty()
        .with_literal("555#", "Kierkegaard: anxiety is the dizziness of freedom")
        .with_predict_trigger("00#");
    let mut decoder = Decoder::new(KeyMap::default())
        .unwrap()
        .with_reserved(reserved);
    assert_eq!(decoder.decode("777#"), "R");
    assert_eq!(
        decoder.decode("555#"),
        "Kierkegaard: anxiety is the dizziness of freedom"
    );
    assert_eq!(decoder.decode("00#"), "Kage predicts: the last input decoded was 555#");
    // 默认触发串不再保留，按普通输入解码（字母被忽略）
    assert_eq!(decoder.decode("AI#"), "");
}

#[rstest]
#[case("India", "2222#", "आ")]
#[case("Holland", "6666#", "I")]
#[case("Holland", "66666#", "J")]
#[case("Thailand", "8888#", "ท")]
#[case("Thailand", "88888#", "T")]
fn regional_variants(#[case] region: &str, #[case] input: &str, #[case] expected: &str) {
    let mut keymap = KeyMap::default();
    keymap.mutate(region);
    let mut decoder = Decoder::new(keymap).unwrap();
    assert_eq!(decoder.decode(input), expected);
}

#[test]
fn decoders_with_different_regions_coexist() {
    let mut india = KeyMap::default();
    india.mutate("India");
    let mut shifted = Decoder::new(india).unwrap();
    let mut plain = Decoder::new(KeyMap::default()).unwrap();
    assert_eq!(shifted.decode("2222#"), "आ");
    assert_eq!(plain.decode("2222#"), "A");
}
