//! HTML rendering for the tabular marks view.
//!
//! Every dynamic value goes through [`escape`]; nothing is interpolated raw.

use std::fmt::Write;

use campusdb_db::models::mark::StudentMark;

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render mark records as a bordered table, one row per record in stored
/// order, with the fixed column header set.
pub fn marks_table(marks: &[StudentMark]) -> String {
    let mut table = String::from(
        "<table border=\"1\"><tr><th>Name</th><th>Roll No</th>\
         <th>WAD</th><th>CC</th><th>DSBDA</th><th>CNS</th><th>AI</th></tr>",
    );
    for mark in marks {
        let _ = write!(
            table,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&mark.name),
            mark.roll_no,
            mark.wad,
            mark.cc,
            mark.dsbda,
            mark.cns,
            mark.ai,
        );
    }
    table.push_str("</table>");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#x27;");
    }

    #[test]
    fn table_escapes_names() {
        let marks = vec![StudentMark {
            name: "<script>alert(1)</script>".into(),
            roll_no: 101,
            wad: 1,
            cc: 2,
            dsbda: 3,
            cns: 4,
            ai: 5,
        }];
        let table = marks_table(&marks);
        assert!(!table.contains("<script>"));
        assert!(table.contains("&lt;script&gt;"));
    }
}
