use pretty_assertions::assert_eq;

use crate::query_builder::from;
use crate::query_builder::helpers::{cond, eq, gt, gte, like, lt, lte, ne, null, r#in};
use crate::renderer::RenderOptions;

#[test]
fn bare_value_means_equality() {
    let sql = from(("games", "g"))
        .where_(("game_id", 1))
        .select(["game_id", "game_name"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id, game_name FROM games AS g WHERE g.game_id = 1"
    );
}

#[test]
fn bare_value_and_eq_render_identically() {
    let bare = from(("games", "g"))
        .where_(("game_id", 1))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    let explicit = from(("games", "g"))
        .where_(("game_id", eq(1)))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(bare, explicit);
}

#[test]
fn string_values_are_single_quoted() {
    let sql = from(("games", "g"))
        .where_(("game_name", "Tetris"))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(sql, "SELECT game_id FROM games AS g WHERE g.game_name = 'Tetris'");
}

#[test]
fn multiple_fields_join_with_and() {
    let sql = from(("games", "g"))
        .where_(cond().field("game_id", 1).field("release_year", 2020))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.game_id = 1 AND g.release_year = 2020"
    );
}

#[test]
fn comparison_operators_map_to_sql() {
    let cases = [
        (gt(2000), "SELECT game_name FROM games AS g WHERE g.release_year > 2000"),
        (lt(2000), "SELECT game_name FROM games AS g WHERE g.release_year < 2000"),
        (gte(2000), "SELECT game_name FROM games AS g WHERE g.release_year >= 2000"),
        (lte(2000), "SELECT game_name FROM games AS g WHERE g.release_year <= 2000"),
        (ne(2000), "SELECT game_name FROM games AS g WHERE g.release_year != 2000"),
    ];
    for (op, expected) in cases {
        let sql = from(("games", "g"))
            .where_(("release_year", op))
            .select(["game_name"])
            .to_sql()
            .expect("to_sql");
        assert_eq!(sql, expected);
    }
}

#[test]
fn in_operator_renders_value_list() {
    let sql = from(("games", "g"))
        .where_(("release_year", r#in([2019, 2020, 2021])))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.release_year IN (2019, 2020, 2021)"
    );
}

#[test]
fn in_operator_quotes_strings() {
    let sql = from(("games", "g"))
        .where_(("game_name", r#in(["Tetris", "Doom"])))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.game_name IN ('Tetris', 'Doom')"
    );
}

#[test]
fn like_operator() {
    let sql = from(("games", "g"))
        .where_(("game_name", like("%Mario%")))
        .select(["game_name"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_name FROM games AS g WHERE g.game_name LIKE '%Mario%'"
    );
}

#[test]
fn eq_null_renders_is_null() {
    let sql = from(("games", "g"))
        .where_(("optional_field", eq(null())))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.optional_field IS NULL"
    );
}

#[test]
fn bare_null_renders_is_null() {
    let sql = from(("games", "g"))
        .where_(("optional_field", null()))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.optional_field IS NULL"
    );
}

#[test]
fn ne_null_renders_is_not_null() {
    let sql = from(("games", "g"))
        .where_(("optional_field", ne(null())))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.optional_field IS NOT NULL"
    );
}

#[test]
fn chained_where_merges_with_and() {
    let sql = from(("games", "g"))
        .where_(("release_year", gt(2000)))
        .where_(("game_name", "Tetris"))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.release_year > 2000 AND g.game_name = 'Tetris'"
    );
}

#[test]
fn chained_where_equals_single_merged_cond() {
    let chained = from(("games", "g"))
        .where_(("a", 1))
        .where_(("b", 2))
        .select(["a"])
        .to_sql()
        .expect("to_sql");
    let merged = from(("games", "g"))
        .where_(cond().field("a", 1).field("b", 2))
        .select(["a"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(chained, merged);
}

#[test]
fn later_write_wins_on_key_collision() {
    let sql = from(("games", "g"))
        .where_(("game_id", 1))
        .where_(("game_id", 2))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(sql, "SELECT game_id FROM games AS g WHERE g.game_id = 2");
}

#[test]
fn or_appends_parenthesized_group() {
    let sql = from(("games", "g"))
        .where_(("game_id", 1))
        .or(("game_id", 2))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE (g.game_id = 1) OR (g.game_id = 2)"
    );
}

#[test]
fn multiple_or_groups_keep_order() {
    let sql = from(("games", "g"))
        .where_(("game_id", 1))
        .or(("game_id", 2))
        .or(("game_name", "Tetris"))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE (g.game_id = 1) OR (g.game_id = 2) OR (g.game_name = 'Tetris')"
    );
}

#[test]
fn multi_field_groups_join_with_and_inside() {
    let sql = from(("games", "g"))
        .where_(cond().field("game_id", 1).field("release_year", 2020))
        .or(cond().field("game_name", "Tetris").field("release_year", gt(2019)))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE (g.game_id = 1 AND g.release_year = 2020) OR (g.game_name = 'Tetris' AND g.release_year > 2019)"
    );
}

#[test]
fn inline_or_groups_render_like_chained() {
    let sql = from(("games", "g"))
        .where_(
            cond()
                .field("game_id", 1)
                .or(cond().field("game_id", 2))
                .or(cond().field("game_name", "Tetris")),
        )
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE (g.game_id = 1) OR (g.game_id = 2) OR (g.game_name = 'Tetris')"
    );
}

#[test]
fn inline_groups_come_before_chained_ones() {
    let sql = from(("games", "g"))
        .where_(cond().field("game_id", 1).or(cond().field("game_name", "Tetris")))
        .or(("release_year", gt(2020)))
        .select(["game_id"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE (g.game_id = 1) OR (g.game_name = 'Tetris') OR (g.release_year > 2020)"
    );
}

#[test]
fn or_only_condition_renders_groups_without_main() {
    let sql = from(("games", "g"))
        .where_(cond().or(cond().field("a", 1)).or(cond().field("b", 2)))
        .select(["a"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(sql, "SELECT a FROM games AS g WHERE (g.a = 1) OR (g.b = 2)");
}

#[test]
fn single_field_group_parens_can_be_disabled() {
    let opts = RenderOptions {
        paren_single_field_or_groups: false,
        ..RenderOptions::default()
    };
    let sql = from(("games", "g"))
        .where_(("game_id", 1))
        .or(("game_id", 2))
        .select(["game_id"])
        .to_sql_with(&opts)
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.game_id = 1 OR g.game_id = 2"
    );
}

#[test]
fn multi_field_groups_stay_parenthesized_without_flag() {
    let opts = RenderOptions {
        paren_single_field_or_groups: false,
        ..RenderOptions::default()
    };
    let sql = from(("games", "g"))
        .where_(("game_id", 1))
        .or(cond().field("game_name", "Tetris").field("release_year", 1984))
        .select(["game_id"])
        .to_sql_with(&opts)
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT game_id FROM games AS g WHERE g.game_id = 1 OR (g.game_name = 'Tetris' AND g.release_year = 1984)"
    );
}

#[test]
fn where_fields_resolve_to_base_table_with_joins() {
    let sql = from(("games", "g"))
        .left_join(("developers", "d"))
        .on(("game_id", "game_id"))
        .where_(("game_id", 1))
        .or(("d.description", like("%action%")))
        .select([("game_id", "id")])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT g.game_id AS id FROM games AS g LEFT JOIN developers AS d ON g.game_id = d.game_id WHERE (g.game_id = 1) OR (d.description LIKE '%action%')"
    );
}

#[test]
fn nested_where_levels_join_with_and_innermost_last() {
    let sql = from(("games", "g"))
        .where_(("a", 1))
        .order_by("b")
        .where_(("c", 2))
        .select(["a"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT a FROM games AS g WHERE g.c = 2 AND g.a = 1 ORDER BY g.b ASC"
    );
}

#[test]
fn level_with_or_groups_is_parenthesized_between_levels() {
    let sql = from(("games", "g"))
        .where_(("a", 1))
        .or(("a", 2))
        .order_by("f")
        .where_(("c", 3))
        .select(["a"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT a FROM games AS g WHERE g.c = 3 AND ((g.a = 1) OR (g.a = 2)) ORDER BY g.f ASC"
    );
}

#[test]
fn empty_condition_emits_no_where() {
    let sql = from(("games", "g"))
        .where_(cond())
        .select(["a"])
        .to_sql()
        .expect("to_sql");
    assert_eq!(sql, "SELECT a FROM games AS g");
}
