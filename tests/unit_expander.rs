use atlink::domain::expander::OptionExpander;
use atlink::domain::models::{AliasField, NoteMetadata, OptionRecord, SourceRecord};
use atlink::integrations::frontmatter::parse_note_metadata;
use atlink::integrations::metadata::{NoteIndex, StaticIndex};

fn file(path: &str) -> SourceRecord {
    let basename = path
        .rsplit('/')
        .next()
        .and_then(|name| name.strip_suffix(".md"))
        .expect("fixture path ends in .md");
    SourceRecord::new(path, basename)
}

fn with_aliases(aliases: AliasField) -> NoteMetadata {
    NoteMetadata {
        aliases: Some(aliases),
    }
}

fn labels(options: &[OptionRecord]) -> Vec<(String, Option<String>)> {
    options
        .iter()
        .map(|o| (o.file_path.clone(), o.alias.clone()))
        .collect()
}

#[test]
fn files_outside_folder_are_skipped() {
    let index = StaticIndex::new(vec![
        file("People/Ann.md"),
        file("Projects/Plan.md"),
        file("People/Bob.md"),
    ]);

    let options = OptionExpander::new(&index).expand("People/", index.files());

    assert_eq!(options.len(), 2);
    assert!(options.iter().all(|o| o.file_path.starts_with("People/")));
}

#[test]
fn folder_prefix_also_matches_sibling_folders() {
    let index = StaticIndex::new(vec![file("Notes/a.md"), file("NotesArchive/b.md")]);

    let options = OptionExpander::new(&index).expand("Notes", index.files());

    assert_eq!(options.len(), 2);
}

#[test]
fn empty_folder_admits_every_file() {
    let index = StaticIndex::new(vec![file("a.md"), file("deep/b.md")]);
    let options = OptionExpander::new(&index).expand("", index.files());
    assert_eq!(options.len(), 2);
}

#[test]
fn file_with_k_aliases_yields_k_plus_one_options() {
    let index = StaticIndex::new(vec![file("Ann.md"), file("Bob.md"), file("Cy.md")])
        .with_metadata(
            "Ann.md",
            with_aliases(AliasField::Multiple(vec![
                "Annie".to_string(),
                "A.".to_string(),
                "Anna".to_string(),
            ])),
        )
        .with_metadata("Bob.md", with_aliases(AliasField::Single("Robert".to_string())))
        .with_metadata("Cy.md", NoteMetadata::default());

    let options = OptionExpander::new(&index).expand("", index.files());

    let count = |path: &str| options.iter().filter(|o| o.file_path == path).count();
    assert_eq!(count("Ann.md"), 4);
    assert_eq!(count("Bob.md"), 2);
    assert_eq!(count("Cy.md"), 1);
}

#[test]
fn alias_options_precede_bare_option_in_file_order() {
    let index = StaticIndex::new(vec![file("Ann.md"), file("Bob.md")]).with_metadata(
        "Ann.md",
        with_aliases(AliasField::Multiple(vec![
            "Annie".to_string(),
            "Anna".to_string(),
        ])),
    );

    let options = OptionExpander::new(&index).expand("", index.files());

    assert_eq!(
        labels(&options),
        vec![
            ("Ann.md".to_string(), Some("Annie".to_string())),
            ("Ann.md".to_string(), Some("Anna".to_string())),
            ("Ann.md".to_string(), None),
            ("Bob.md".to_string(), None),
        ]
    );
    assert!(options.iter().all(|o| !o.is_create_new_option));
    assert_eq!(options[0].file_name, "Ann");
}

#[test]
fn empty_aliases_are_still_options() {
    let index = StaticIndex::new(vec![file("Ann.md")])
        .with_metadata("Ann.md", with_aliases(AliasField::from_comma_list("Annie, ")));

    let options = OptionExpander::new(&index).expand("", index.files());

    assert_eq!(options.len(), 3);
    assert_eq!(options[1].alias.as_deref(), Some(""));
}

#[test]
fn comma_string_and_list_expand_identically() {
    let from_string = parse_note_metadata("---\naliases: Annie,  Anna ,A.\n---\nbody\n");
    let from_list = parse_note_metadata("---\naliases:\n  - Annie\n  - Anna\n  - A.\n---\n");
    assert_eq!(from_string, from_list);

    let files = vec![file("Ann.md")];
    let string_index = StaticIndex::new(files.clone()).with_metadata("Ann.md", from_string);
    let list_index = StaticIndex::new(files.clone()).with_metadata("Ann.md", from_list);

    assert_eq!(
        OptionExpander::new(&string_index).expand("", &files),
        OptionExpander::new(&list_index).expand("", &files)
    );
}
