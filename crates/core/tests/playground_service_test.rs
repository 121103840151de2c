//! End-to-end tests of playground discovery and code lenses

use lsp_types::{CodeLens, Position, Range, Url};
use playground_lens_core::{
    CancellationToken, CrateTarget, DocumentStore, Error, GatePolicy, PlaygroundConfig,
    PlaygroundService, SupportedCodeLensCommand, SupportedCommands, TargetKind,
    interfaces::{ModuleResolver, ToolchainCapability},
    services::MainFunctionLenses,
};
use std::sync::Arc;

const FILE_URI: &str = "file:///work/Mod/src/File.rs";

const PLAYGROUNDS: &str = r#"use playgrounds::playground;

fn helper() -> u32 {
    41
}

playground!("first", {
    let x = helper() + 1;
    println!("{x}");
});
playground! {
    println!("unnamed");
}
"#;

struct FixedModule(Option<CrateTarget>);

impl ModuleResolver for FixedModule {
    fn resolve_target(&self, _uri: &Url) -> Option<CrateTarget> {
        self.0.clone()
    }
}

struct Fixture {
    store: Arc<DocumentStore>,
    service: PlaygroundService,
    uri: Url,
}

impl Fixture {
    fn new(text: &str) -> Self {
        Self::with(text, Some(TargetKind::Lib), true, PlaygroundConfig::default())
    }

    fn with(
        text: &str,
        kind: Option<TargetKind>,
        play_supported: bool,
        config: PlaygroundConfig,
    ) -> Self {
        let uri = Url::parse(FILE_URI).unwrap();
        let store = Arc::new(DocumentStore::new());
        store.open(uri.clone(), 1, text);

        let toolchain: Arc<dyn ToolchainCapability> = Arc::new(play_supported);
        let service = PlaygroundService::new(
            &config,
            store.clone(),
            Arc::new(FixedModule(kind.map(|kind| CrateTarget::new("Mod", kind)))),
            toolchain,
            Arc::new(MainFunctionLenses::new()),
        )
        .unwrap();

        Self { store, service, uri }
    }

    fn ids(&self) -> Vec<String> {
        self.service
            .document_playgrounds(&self.uri, &CancellationToken::new())
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect()
    }

    fn lenses(&self, range: Option<Range>) -> Vec<CodeLens> {
        self.service
            .code_lenses(&self.uri, range, &all_commands(), &CancellationToken::new())
            .unwrap()
    }
}

fn all_commands() -> SupportedCommands {
    SupportedCommands::new()
        .with(SupportedCodeLensCommand::Run, "rust.run")
        .with(SupportedCodeLensCommand::Debug, "rust.debug")
        .with(SupportedCodeLensCommand::Play, "rust.play")
}

fn titles(lenses: &[CodeLens]) -> Vec<String> {
    lenses
        .iter()
        .map(|lens| lens.command.as_ref().unwrap().title.clone())
        .collect()
}

#[test]
fn test_document_playgrounds() {
    let fixture = Fixture::new(PLAYGROUNDS);
    let items = fixture
        .service
        .document_playgrounds(&fixture.uri, &CancellationToken::new())
        .unwrap();

    insta::assert_json_snapshot!(items, @r###"
    [
      {
        "id": "Mod/File.rs:7",
        "label": "first",
        "location": {
          "uri": "file:///work/Mod/src/File.rs",
          "range": {
            "start": {
              "line": 6,
              "character": 0
            },
            "end": {
              "line": 9,
              "character": 2
            }
          }
        }
      },
      {
        "id": "Mod/File.rs:11",
        "location": {
          "uri": "file:///work/Mod/src/File.rs",
          "range": {
            "start": {
              "line": 10,
              "character": 0
            },
            "end": {
              "line": 12,
              "character": 1
            }
          }
        }
      }
    ]
    "###);
}

#[test]
fn test_file_without_import_has_no_playgrounds() {
    let text = PLAYGROUNDS.replacen("use playgrounds::playground;", "use std::fmt;", 1);
    let fixture = Fixture::new(&text);

    assert!(fixture.ids().is_empty());
    assert!(fixture.lenses(None).is_empty());
}

#[test]
fn test_same_name_items_are_not_playgrounds() {
    let text = r#"use playgrounds::prelude::*;

pub fn playground() {}

#[playground]
struct Playground;

fn call() {
    playground();
}
"#;
    assert!(Fixture::new(text).ids().is_empty());
}

#[test]
fn test_markers_sharing_a_line_get_columns() {
    let text = "use playgrounds::playground;\n\nplayground!(\"a\", {}); playground!(\"b\", {});\nplayground!(\"c\", {});\n";
    assert_eq!(
        Fixture::new(text).ids(),
        vec!["Mod/File.rs:3:1", "Mod/File.rs:3:23", "Mod/File.rs:4:1"]
    );
}

#[test]
fn test_unknown_module_yields_nothing() {
    let fixture = Fixture::with(PLAYGROUNDS, None, true, PlaygroundConfig::default());

    assert!(fixture.ids().is_empty());
    assert!(fixture.lenses(None).is_empty());
}

#[test]
fn test_late_import_under_before_use_policy() {
    let text = "playground!(\"early\", {});\nuse playgrounds::playground;\nplayground!(\"late\", {});\n";

    assert_eq!(
        Fixture::new(text).ids(),
        vec!["Mod/File.rs:1", "Mod/File.rs:3"]
    );

    let config = PlaygroundConfig {
        gate_policy: Some(GatePolicy::BeforeUse),
        ..Default::default()
    };
    let fixture = Fixture::with(text, Some(TargetKind::Lib), true, config);
    assert_eq!(fixture.ids(), vec!["Mod/File.rs:3"]);
}

#[test]
fn test_play_lenses_for_whole_document() {
    let fixture = Fixture::new(PLAYGROUNDS);
    let lenses = fixture.lenses(None);

    assert_eq!(titles(&lenses), vec!["Play \"first\"", "Play \"Mod/File.rs:11\""]);
    let command = lenses[0].command.as_ref().unwrap();
    assert_eq!(command.command, "rust.play");
    assert_eq!(command.arguments.as_ref().unwrap()[0]["id"], "Mod/File.rs:7");
}

#[test]
fn test_lenses_limited_to_requested_range() {
    let fixture = Fixture::new(PLAYGROUNDS);

    // Line 12 (0-based 11) is inside the second marker only
    let inside_second = Range::new(Position::new(11, 0), Position::new(11, 4));
    assert_eq!(
        titles(&fixture.lenses(Some(inside_second))),
        vec!["Play \"Mod/File.rs:11\""]
    );

    // The helper function touches no marker
    let helper = Range::new(Position::new(2, 0), Position::new(4, 1));
    assert!(fixture.lenses(Some(helper)).is_empty());
}

#[test]
fn test_run_and_debug_survive_missing_play_support() {
    let text = "use playgrounds::playground;\n\nfn main() {\n    playground!(\"inside main\", {});\n}\n";

    let fixture = Fixture::with(text, Some(TargetKind::Bin), false, PlaygroundConfig::default());
    assert_eq!(titles(&fixture.lenses(None)), vec!["Run Mod", "Debug Mod"]);

    let fixture = Fixture::with(text, Some(TargetKind::Bin), true, PlaygroundConfig::default());
    assert_eq!(
        titles(&fixture.lenses(None)),
        vec!["Run Mod", "Debug Mod", "Play \"inside main\""]
    );
}

#[test]
fn test_client_without_play_command() {
    let fixture = Fixture::new(PLAYGROUNDS);
    let commands = SupportedCommands::new().with(SupportedCodeLensCommand::Run, "rust.run");

    let lenses = fixture
        .service
        .code_lenses(&fixture.uri, None, &commands, &CancellationToken::new())
        .unwrap();
    assert!(lenses.is_empty());
}

#[test]
fn test_ids_follow_document_edits() {
    let fixture = Fixture::new(PLAYGROUNDS);
    assert_eq!(fixture.ids(), vec!["Mod/File.rs:7", "Mod/File.rs:11"]);

    // Appending below the markers keeps their ids
    let appended = format!("{PLAYGROUNDS}\nfn more() {{}}\n");
    fixture.store.change(&fixture.uri, 2, appended).unwrap();
    assert_eq!(fixture.ids(), vec!["Mod/File.rs:7", "Mod/File.rs:11"]);

    // Inserting a line above shifts them
    let shifted = format!("// header\n{PLAYGROUNDS}");
    fixture.store.change(&fixture.uri, 3, shifted).unwrap();
    assert_eq!(fixture.ids(), vec!["Mod/File.rs:8", "Mod/File.rs:12"]);
}

#[test]
fn test_cancelled_requests_fail() {
    let fixture = Fixture::new(PLAYGROUNDS);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let playgrounds = fixture.service.document_playgrounds(&fixture.uri, &cancel);
    assert!(matches!(playgrounds, Err(Error::Cancelled)));

    let lenses = fixture
        .service
        .code_lenses(&fixture.uri, None, &all_commands(), &cancel);
    assert!(lenses.unwrap_err().is_cancelled());
}

#[test]
fn test_closed_document_is_an_error() {
    let fixture = Fixture::new(PLAYGROUNDS);
    fixture.store.close(&fixture.uri).unwrap();

    let result = fixture
        .service
        .document_playgrounds(&fixture.uri, &CancellationToken::new());
    assert!(matches!(result, Err(Error::DocumentNotOpen(_))));
}

#[test]
fn test_reopened_document_is_rescanned() {
    let fixture = Fixture::new("use playgrounds::playground;\nplayground!(\"a\", {});\n");
    let labelled = |fixture: &Fixture| -> Vec<(String, Option<String>)> {
        fixture
            .service
            .document_playgrounds(&fixture.uri, &CancellationToken::new())
            .unwrap()
            .into_iter()
            .map(|item| (item.id, item.label))
            .collect()
    };
    assert_eq!(
        labelled(&fixture),
        vec![("Mod/File.rs:2".to_string(), Some("a".to_string()))]
    );

    // Editors commonly reopen a file at version 1 again
    fixture.store.close(&fixture.uri).unwrap();
    fixture.store.open(
        fixture.uri.clone(),
        1,
        "use playgrounds::playground;\n\n\n\n\nplayground!(\"bbbbbb\", {});\n",
    );
    assert_eq!(
        labelled(&fixture),
        vec![("Mod/File.rs:6".to_string(), Some("bbbbbb".to_string()))]
    );

    // Same version, new text, through a change
    fixture
        .store
        .change(&fixture.uri, 1, "fn main() {}\n")
        .unwrap();
    assert!(labelled(&fixture).is_empty());
}
