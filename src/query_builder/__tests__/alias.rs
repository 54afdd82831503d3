use crate::alias::AliasGenerator;

#[test]
fn table_aliases_are_sequential() {
    let gen = AliasGenerator::new();
    assert_eq!(gen.next_table(), "t1");
    assert_eq!(gen.next_table(), "t2");
    assert_eq!(gen.next_table(), "t3");
}

#[test]
fn subquery_aliases_are_sequential_and_independent() {
    let gen = AliasGenerator::new();
    assert_eq!(gen.next_subquery(), "s1");
    assert_eq!(gen.next_table(), "t1");
    assert_eq!(gen.next_subquery(), "s2");
    // счётчики не влияют друг на друга
    assert_eq!(gen.next_table(), "t2");
}

#[test]
fn reset_zeroes_both_counters() {
    let gen = AliasGenerator::new();
    gen.next_table();
    gen.next_subquery();
    gen.reset();
    assert_eq!(gen.next_table(), "t1");
    assert_eq!(gen.next_subquery(), "s1");
}

#[test]
fn chains_do_not_share_counters() {
    use crate::query_builder::from;

    let q1 = from("games").select(["game_id"]).to_sql().expect("to_sql");
    let q2 = from("games").select(["game_id"]).to_sql().expect("to_sql");
    // каждый from() начинает с t1 — без глобального состояния
    assert_eq!(q1, q2);
    assert_eq!(q1, "SELECT game_id FROM games AS t1");
}
