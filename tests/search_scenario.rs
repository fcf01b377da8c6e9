// tests/search_scenario.rs
use robot_guide::controller::SearchController;
use robot_guide::csv::{ HeaderMode, SourceRow };
use robot_guide::filter::{ filter_records, matches_query };
use robot_guide::record::{ normalize_row, Dataset };
use robot_guide::render::{ render_cards, CardBoard, Display };

use std::sync::Arc;

fn row(line: u64, cells: &[&str]) -> SourceRow {
    SourceRow { line, cells: cells.iter().map(|c| c.to_string()).collect() }
}

fn buddy_ozobot() -> Dataset {
    let header: Vec<String> = ["Name", "Manufacturer", "Price "].iter().map(|s| s.to_string()).collect();
    Dataset::from_rows(
        &header,
        &[row(2, &["Buddy", "RoboCorp", "199"]), row(3, &["Ozobot", "Ozobot Inc", ""])],
        false,
    )
}

fn names(ds: &Dataset, q: &str) -> Vec<String> {
    filter_records(ds, q)
        .into_iter()
        .map(|r| r.get("Name").unwrap_or_default().to_string())
        .collect()
}

#[test]
fn normalizer_zips_headers() {
    let headers = vec!["Name".to_string(), "Manufacturer".to_string()];
    let r = normalize_row(&headers, &["RoboX", "AcmeCo"]);
    assert_eq!(r.get("Name"), Some("RoboX"));
    assert_eq!(r.get("Manufacturer"), Some("AcmeCo"));
    assert_eq!(r.len(), 2);
}

#[test]
fn robo_matches_manufacturer_only_for_buddy() {
    let ds = buddy_ozobot();
    assert_eq!(names(&ds, "robo"), vec!["Buddy"]);
    assert_eq!(names(&ds, "ROBO"), vec!["Buddy"]);

    let cards = render_cards(filter_records(&ds, "robo"));
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Buddy");
    assert_eq!(cards[0].price, "199");
}

#[test]
fn empty_query_is_identity() {
    let ds = buddy_ozobot();
    assert_eq!(names(&ds, ""), vec!["Buddy", "Ozobot"]);
}

#[test]
fn missing_price_renders_placeholder() {
    let ds = buddy_ozobot();
    let cards = render_cards(&ds);
    assert_eq!(cards[1].price, "N/A");
}

#[test]
fn render_matches_predicate_in_order() {
    let text = "Name,Manufacturer\nDash,Wonder Workshop\nCue,Wonder Workshop\nBee-Bot,TTS\nWonderbot,Acme\n";
    let ds = Dataset::parse(text, HeaderMode::Auto, false).unwrap();

    for q in ["", "wonder", "o", "tts", "zzz", "BOT"] {
        let expected: Vec<&str> = ds
            .iter()
            .filter(|r| matches_query(r, q))
            .filter_map(|r| r.name())
            .collect();
        let cards = render_cards(filter_records(&ds, q));
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, expected, "query {q:?}");
    }
}

#[test]
fn controller_never_narrows_cumulatively() {
    // "ab" then "b": filtering the previous result would lose "Bolt".
    let text = "Name,Manufacturer\nAbacus,X\nBolt,Y\nCab,Z\n";
    let ds = Arc::new(Dataset::parse(text, HeaderMode::FirstRow, false).unwrap());
    let controller = SearchController::new(Arc::clone(&ds));
    let mut board = CardBoard::default();

    controller.show_all(&mut board);
    assert_eq!(board.titles(), vec!["Abacus", "Bolt", "Cab"]);

    controller.on_input("ab", &mut board);
    assert_eq!(board.titles(), vec!["Abacus", "Cab"]);

    let view = controller.on_input("b", &mut board);
    assert_eq!(board.titles(), vec!["Abacus", "Bolt", "Cab"]);
    assert_eq!(view.row_ix, vec![0, 1, 2]);

    controller.on_input("", &mut board);
    assert_eq!(board.len(), ds.len());
}

#[derive(Default)]
struct Recorder {
    calls: Vec<usize>,
}

impl Display for Recorder {
    fn replace_all(&mut self, cards: Vec<robot_guide::render::Card>) {
        self.calls.push(cards.len());
    }
}

#[test]
fn every_input_replaces_the_display_once() {
    let controller = SearchController::new(Arc::new(buddy_ozobot()));
    let mut rec = Recorder::default();
    for q in ["r", "ro", "rob", "robo", "robot", ""] {
        controller.on_input(q, &mut rec);
    }
    assert_eq!(rec.calls, vec![1, 1, 1, 1, 0, 2]);
}

#[test]
fn apply_filters_full_dataset_each_time() {
    use robot_guide::filter::{ Criteria, SortKey, YesNo };

    let text = "Name,Manufacturer,Price,Batteries\n\
                Bee-Bot,TTS,$89.95,No\n\
                Blue-Bot,TTS,$129.95,No\n\
                Mouse,Learning Resources,$59.99,Yes\n";
    let ds = Arc::new(Dataset::parse(text, HeaderMode::Auto, false).unwrap());
    let controller = SearchController::new(ds);
    let mut board = CardBoard::default();

    let batteries = Criteria { batteries: YesNo::No, ..Criteria::with_query("bot") };
    controller.apply(&batteries, SortKey::Price, &mut board);
    assert_eq!(board.titles(), vec!["Bee-Bot", "Blue-Bot"]);

    // Widening again brings back rows the previous call excluded.
    let view = controller.apply(&Criteria::default(), SortKey::Price, &mut board);
    assert_eq!(board.titles(), vec!["Mouse", "Bee-Bot", "Blue-Bot"]);
    assert_eq!(view.row_ix, vec![2, 0, 1]);

    let by_name = controller.apply(&Criteria::with_query("t"), SortKey::Name, &mut board);
    assert_eq!(board.titles(), vec!["Bee-Bot", "Blue-Bot"]);
    assert_eq!(by_name.len(), 2);
}

#[test]
fn lowercase_headers_still_search() {
    let ds = Dataset::parse("name,manufacturer\nBuddy,RoboCorp\n", HeaderMode::Auto, false).unwrap();
    assert_eq!(names(&ds, "robo"), vec!["Buddy"]);
}
