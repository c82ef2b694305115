// tests/end_to_end.rs
use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;

use poe_uniques::config::RunOptions;
use poe_uniques::core::Fetch;
use poe_uniques::progress::NullProgress;
use poe_uniques::{runner, Error, Result};

const BASE: &str = "http://wiki.test";
const INDEX: &str = "http://wiki.test/Unique_item";

/// Canned wiki: url -> page body, plus a log of what was asked for.
struct Wiki {
    pages: HashMap<String, String>,
    asked: Mutex<Vec<String>>,
}

impl Wiki {
    fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: pages.iter().map(|(u, p)| (u.to_string(), p.clone())).collect(),
            asked: Mutex::new(Vec::new()),
        }
    }
}

impl Fetch for Wiki {
    fn get(&self, url: &str) -> Result<String> {
        self.asked.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status { url: url.to_string(), status: 404 })
    }
}

fn index_page() -> String {
    r#"<html><body><table><tr><td>
        <div class="hlist"><a href="/List_of_unique_belts">Belts</a></div>
    </td></tr></table></body></html>"#
        .to_string()
}

fn belts_page() -> String {
    "<html><body><table><tbody>\
     <tr><th>Name</th><th>Stats</th></tr>\
     <tr id=\"Doryanis_Invitation\"><td>Doryani's Invitation</td><td><div class=\"item-stats\">\
     <span class=\"group\">+(20\u{2013}30) to maximum Life</span>\
     <span class=\"group\"><a href=\"/Doryani%27s_Invitation\">&lt;Style Variant&gt;</a></span>\
     </div></td></tr>\
     </tbody></table></body></html>"
        .to_string()
}

fn doryani_page() -> String {
    "<html><body>\
     <h2><span class=\"mw-headline\" id=\"Modifiers\">Modifiers</span></h2>\
     <ul><li>Old variant</li></ul>\
     <dl><dd>(20\u{2013}25)% increased Fire Damage</dd>\n<dd>Your Flasks grant 10% chance to Freeze</dd></dl>\
     <ul><li>Current variant</li></ul>\
     <dl><dd>(25\u{2013}30)% increased Fire Damage</dd></dl>\
     <h2><span id=\"Version_history\">Version history</span></h2>\
     </body></html>"
        .to_string()
}

fn maps_page() -> String {
    "<html><body><table><tbody>\
     <tr id=\"Maelstrom\"><td>Maelstr\u{00F6}m of Chaos</td><td><div class=\"item-stats\">\
     <span class=\"group\">Area is inhabited by 2 additional Rogue Exiles</span>\
     </div></td></tr>\
     </tbody></table></body></html>"
        .to_string()
}

fn options(dir: &tempfile::TempDir) -> RunOptions {
    RunOptions {
        index_url: INDEX.to_string(),
        base_url: BASE.to_string(),
        extra_pages: vec!["/List_of_unique_maps".to_string()],
        out_path: dir.path().join("Uniques.txt"),
        workers: 2,
    }
}

#[test]
fn writes_header_then_one_line_per_item() {
    let wiki = Wiki::new(&[
        (INDEX, index_page()),
        ("http://wiki.test/List_of_unique_belts", belts_page()),
        ("http://wiki.test/List_of_unique_maps", maps_page()),
        ("http://wiki.test/Doryani%27s_Invitation", doryani_page()),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);

    let summary = runner::run(&opts, &wiki, &mut NullProgress).unwrap();
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.items, 2);

    let text = fs::read_to_string(&opts.out_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[..5].iter().all(|l| l.starts_with(';')));
    assert_eq!(lines[5], "");
    assert_eq!(
        lines[6],
        "Doryani's Invitation|@20-30:To Maximum Life\
         | -Old- |20-25:Increased Fire Damage|10:Your Flasks Grant Chance To Freeze\
         | -Current- |25-30:Increased Fire Damage"
    );
    assert_eq!(lines[7], "Maelstrom of Chaos|2:Area Is Inhabited By Additional Rogue Exiles");

    let asked = wiki.asked.lock().unwrap();
    assert_eq!(asked.len(), 4);
    assert_eq!(asked[0], INDEX);
}

#[test]
fn failed_listing_page_leaves_only_the_header() {
    let wiki = Wiki::new(&[
        (INDEX, index_page()),
        ("http://wiki.test/List_of_unique_belts", belts_page()),
        ("http://wiki.test/Doryani%27s_Invitation", doryani_page()),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);

    let err = runner::run(&opts, &wiki, &mut NullProgress).unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, ref url } if url.ends_with("List_of_unique_maps")));

    let text = fs::read_to_string(&opts.out_path).unwrap();
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn index_without_table_writes_nothing() {
    let wiki = Wiki::new(&[(INDEX, "<html><body><p>moved</p></body></html>".to_string())]);
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);

    let err = runner::run(&opts, &wiki, &mut NullProgress).unwrap_err();
    assert!(matches!(err, Error::Structure { .. }));
    assert!(!opts.out_path.exists());
}
