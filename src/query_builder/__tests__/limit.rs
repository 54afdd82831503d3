use pretty_assertions::assert_eq;

use crate::query_builder::from;
use crate::query_builder::helpers::gt;

#[test]
fn limit_only() {
    let sql = from(("games", "g"))
        .limit(10)
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(sql, "SELECT game_id FROM games AS g LIMIT 10");
}

#[test]
fn limit_with_offset() {
    let sql = from(("games", "g"))
        .limit_offset(10, 5)
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(sql, "SELECT game_id FROM games AS g LIMIT 10 OFFSET 5");
}

#[test]
fn offset_replaces_only_offset() {
    let sql = from(("games", "g"))
        .limit(10)
        .offset(5)
        .offset(7)
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(sql, "SELECT game_id FROM games AS g LIMIT 10 OFFSET 7");
}

#[test]
fn limit_after_where() {
    let sql = from(("games", "g"))
        .where_(("release_year", gt(2000)))
        .limit(10)
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.release_year > 2000 LIMIT 10"
    );
}

#[test]
fn limit_keeps_preceding_order_by() {
    let sql = from(("games", "g"))
        .order_by("game_name")
        .limit(5)
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g ORDER BY g.game_name ASC LIMIT 5"
    );
}
