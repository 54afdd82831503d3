use crate::renderer::writer::SqlWriter;

#[test]
fn push_and_finish_basic() {
    let mut w = SqlWriter::new(16);
    w.push("SELECT ");
    w.push_char('*');
    w.push(" FROM ");
    let tbl = String::from("users");
    w.push(tbl); // принимает и String (AsRef<str>)
    assert_eq!(w.finish(), "SELECT * FROM users");
}

#[test]
fn push_sep_skips_first_element() {
    let mut w = SqlWriter::new(16);
    for (i, part) in ["a", "b", "c"].iter().enumerate() {
        w.push_sep(i, ", ");
        w.push(part);
    }
    assert_eq!(w.finish(), "a, b, c");
}

#[test]
fn numeric_pushes() {
    let mut w = SqlWriter::new(16);
    w.push("LIMIT ");
    w.push_u64(10);
    w.push(" OFFSET ");
    w.push_u64(20);
    w.push(" / ");
    w.push_i64(-7);
    assert_eq!(w.finish(), "LIMIT 10 OFFSET 20 / -7");
}
