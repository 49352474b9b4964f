// tests/monitor_page.rs
//
// Page level: title, task count, row region, recovered gaps.
mod common;
use common::*;

use stav_board::core::Markup;
use stav_board::specs::{ parse_page, StructureIssue };

#[test]
fn title_drops_timer_and_counts_task_headers() {
    let doc = page("Городская олимпиада, 7 класс", 3, &[]);
    let p = parse_page(&doc, "41");

    assert_eq!(p.contest.id, "41");
    assert_eq!(p.contest.title, "Городская олимпиада, 7 класс");
    assert_eq!(p.contest.task_count, 3);
    assert!(p.issues.is_empty());
    assert!(p.body.is_some());
}

#[test]
fn parentheses_in_the_title_itself_survive() {
    let doc = page("Round 2 (juniors)", 1, &[]);
    let p = parse_page(&doc, "7");
    assert_eq!(p.contest.title, "Round 2 (juniors)");
}

#[test]
fn markers_are_case_insensitive_and_entities_decoded() {
    let doc = r#"<SPAN CLASS="page-title">Tom &amp; Jerry cup</SPAN>
<THEAD><TH CLASS="task">A</TH><TH class="TASK">B</TH></THEAD><TBODY></TBODY>"#;
    let p = parse_page(doc, "1");
    assert_eq!(p.contest.title, "Tom & Jerry cup");
    assert_eq!(p.contest.task_count, 2);
}

#[test]
fn missing_pieces_fall_back_to_defaults() {
    let p = parse_page("<html><body>maintenance</body></html>", "9");
    assert_eq!(p.contest.title, "");
    assert_eq!(p.contest.task_count, 0);
    assert!(p.body.is_none());
    assert_eq!(
        p.issues,
        vec![StructureIssue::MissingTitle, StructureIssue::MissingHeader, StructureIssue::MissingBody]
    );
}

#[test]
fn only_the_first_header_block_counts() {
    let doc = r#"<span class="page-title">X</span>
<thead><th class="task">A</th></thead>
<thead><th class="task">A</th><th class="task">B</th><th class="task">C</th></thead>
<tbody></tbody>"#;
    assert_eq!(parse_page(doc, "1").contest.task_count, 1);
}

#[test]
fn slice_first_uses_first_markers_without_balancing() {
    let m = Markup::new("<b>one</b><b>two</b>");
    assert_eq!(m.slice_first("<b>", "</b>"), Some("one"));

    // nested open: first close still wins
    let m = Markup::new("<tbody>a<tbody>b</tbody>c</tbody>");
    assert_eq!(m.slice_first("<tbody>", "</tbody>"), Some("a<tbody>b"));

    // close before open → empty region, not an error
    let m = Markup::new("</tbody> junk <tbody>rows");
    assert_eq!(m.slice_first("<tbody>", "</tbody>"), Some(""));

    assert_eq!(Markup::new("<tbody>rows").slice_first("<tbody>", "</tbody>"), None);
}

#[test]
fn stray_close_before_body_means_no_rows() {
    let doc = format!("</tbody>{}", page("T", 1, &[row("1", "alice", &[ac("+", "1:00")], "1", "1")]));
    let standings = stav_board::specs::read_contest(&doc, "3", Default::default()).unwrap();
    assert_eq!(standings.contest.task_count, 1);
    assert!(standings.participants.is_empty());
}
