// tests/export_e2e.rs
//
// Leaderboard → table → CSV/TSV/JSON files.
use std::fs;

use stav_board::config::options::{ ExportFormat, ExportOptions };
use stav_board::csv::write_row;
use stav_board::file::{ self, export_leaderboard, export_standings, render_leaderboard };
use stav_board::model::{
    ContestDescriptor, ContestStandings, Leaderboard, ParticipantRecord, TaskRecord, TaskStatus, UnifiedEntry,
};
use stav_board::table::{ task_letter, TableData };

fn task(status: TaskStatus, attempts: u32) -> TaskRecord {
    TaskRecord { status, attempts, penalty: None }
}

fn sample_board() -> Leaderboard {
    Leaderboard {
        contests: vec![
            ContestDescriptor { id: "1".into(), title: "Day 1".into(), task_count: 2 },
            ContestDescriptor { id: "2".into(), title: "Day, two".into(), task_count: 1 },
        ],
        entries: vec![
            UnifiedEntry {
                username: "alice".into(),
                tasks: vec![task(TaskStatus::Accepted, 1), task(TaskStatus::Accepted, 3), TaskRecord::PLACEHOLDER],
                solved_total: 2,
                penalty_total: 52,
                attempts_total: 4,
            },
            UnifiedEntry {
                username: "bob \"b\"".into(),
                tasks: vec![TaskRecord::PLACEHOLDER, task(TaskStatus::WrongOrAttempted, 2), task(TaskStatus::Accepted, 1)],
                solved_total: 1,
                penalty_total: 5,
                attempts_total: 1,
            },
        ],
    }
}

#[test]
fn letters_continue_past_z() {
    assert_eq!(task_letter(0), "A");
    assert_eq!(task_letter(25), "Z");
    assert_eq!(task_letter(26), "AA");
    assert_eq!(task_letter(27), "AB");
}

#[test]
fn table_has_groups_headers_and_classes() {
    let t = TableData::from_leaderboard(&sample_board());
    assert_eq!(t.headers, ["#", "User", "A", "B", "A", "Solved", "Penalty", "Attempts"]);
    assert_eq!(t.group_row(), ["", "", "Day 1", "", "Day, two", "", "", ""]);
    assert_eq!(t.group_of(4).map(|g| g.title.as_str()), Some("Day, two"));
    assert!(t.group_of(1).is_none());

    let alice = &t.rows[0];
    assert_eq!(alice[0].text, "1");
    assert_eq!(alice[3].text, "+3");
    assert_eq!(alice[3].class, Some("AC"));
    assert_eq!(alice[4].text, ".");
    assert_eq!(alice[4].class, Some("NS"));
    assert_eq!(t.rows[1][3].class, Some("WA"));
    assert_eq!(alice[7].text, "4");
}

#[test]
fn csv_text_quotes_where_needed() {
    let csv = render_leaderboard(&sample_board(), ExportFormat::Csv, true).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], r#",,Day 1,,"Day, two",,,"#);
    assert_eq!(lines[1], "#,User,A,B,A,Solved,Penalty,Attempts");
    assert_eq!(lines[2], "1,alice,+,+3,.,2,52,4");
    assert_eq!(lines[3], r#"2,"bob ""b""",.,-2,+,1,5,1"#);
    assert_eq!(lines.len(), 4);

    let bare = render_leaderboard(&sample_board(), ExportFormat::Tsv, false).unwrap();
    assert_eq!(bare.lines().next(), Some("1\talice\t+\t+3\t.\t2\t52\t4"));
}

#[test]
fn write_row_plain() {
    let mut buf = Vec::new();
    write_row(&mut buf, &["a".to_string(), "b\tc".to_string()], ',').unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "a,b\tc\n");
}

#[test]
fn export_csv_and_json_files() {
    let dir = std::env::temp_dir().join("stav_board_export_e2e");
    let _ = fs::remove_dir_all(&dir);

    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("nested").join("board").to_str().unwrap());

    let csv_path = export_leaderboard(&opts, &sample_board()).unwrap();
    assert!(csv_path.to_string_lossy().ends_with("board.csv"));
    assert!(fs::read_to_string(&csv_path).unwrap().contains("alice,+,+3"));

    opts.format = ExportFormat::Json;
    let json_path = export_leaderboard(&opts, &sample_board()).unwrap();
    let back: Leaderboard = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(back, sample_board());
}

#[test]
fn export_single_contest_standings() {
    let tmp = tempfile::tempdir().unwrap();
    let standings = ContestStandings {
        contest: ContestDescriptor { id: "9".into(), title: "Solo".into(), task_count: 1 },
        participants: vec![ParticipantRecord {
            username: "zoe".into(),
            rank: Some(4),
            solved: 1,
            penalty: 17,
            tasks: vec![task(TaskStatus::Accepted, 1)],
        }],
    };

    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(tmp.path().join("solo").to_str().unwrap());

    let path = export_standings(&opts, &standings).unwrap();
    let text = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "\t\tSolo\t\t");
    assert_eq!(lines[1], "#\tUser\tA\tSolved\tPenalty");
    assert_eq!(lines[2], "4\tzoe\t+\t1\t17");
}

#[test]
fn unranked_place_is_blank() {
    let standings = ContestStandings {
        contest: ContestDescriptor { id: "9".into(), title: "Solo".into(), task_count: 0 },
        participants: vec![ParticipantRecord {
            username: "guest".into(),
            rank: None,
            solved: 0,
            penalty: 0,
            tasks: vec![],
        }],
    };
    let t = TableData::from_standings(&standings);
    assert_eq!(t.rows[0][0].text, "");
    assert_eq!(t.rows[0][1].text, "guest");
}

#[test]
fn directory_target_is_refused() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    let target = tmp.path().join("taken");
    fs::create_dir_all(target.join("x.csv")).unwrap();
    opts.set_path(target.join("x.csv").to_str().unwrap());

    assert!(export_leaderboard(&opts, &sample_board()).is_err());
}

#[test]
fn stem_from_contest_ids() {
    assert_eq!(file::suggest_stem(&["101".to_string(), "102".to_string()]), "leaderboard_101_102");
    assert_eq!(file::suggest_stem(&Vec::new()), "leaderboard");
}
