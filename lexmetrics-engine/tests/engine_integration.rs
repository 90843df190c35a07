//! End-to-end tests: data root on disk to batch report

use lexmetrics_engine::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lay out StopWords/, MasterDictionary/ and textfile/ under `root`
fn write_data_root(root: &Path) {
    let stop_dir = root.join("StopWords");
    fs::create_dir_all(&stop_dir).unwrap();
    fs::write(
        stop_dir.join("StopWords_Names.txt"),
        "SMITH | Surnames from 1990 census > .002%. www.census.gov.genealogy/names/dist.all.last\nJOHNSON\n",
    )
    .unwrap();
    fs::write(stop_dir.join("StopWords_Generic.txt"), "ABOUT\nABOVE\n").unwrap();
    // Windows-1252 encoded source
    fs::write(stop_dir.join("StopWords_Currencies.txt"), b"EURO | \x80\n").unwrap();

    let dict_dir = root.join("MasterDictionary");
    fs::create_dir_all(&dict_dir).unwrap();
    fs::write(
        dict_dir.join("positive-words.txt"),
        "good\ngreat\nprofit\nson\n",
    )
    .unwrap();
    fs::write(dict_dir.join("negative-words.txt"), "bad\nloss\neuro\n").unwrap();

    let corpus = root.join("textfile");
    fs::create_dir_all(&corpus).unwrap();
    fs::write(
        corpus.join("37.txt"),
        "Our profit was great this year. We had no loss!",
    )
    .unwrap();
    fs::write(corpus.join("38.txt"), "Bad news. The euro fell.").unwrap();
    fs::write(corpus.join("39.txt"), "").unwrap();
}

fn config_for(root: &Path) -> EngineConfig {
    EngineConfig::default().with_data_root(root)
}

#[test]
fn test_resources_load_from_data_root() {
    let dir = TempDir::new().unwrap();
    write_data_root(dir.path());

    let resources = Resources::load(&config_for(dir.path())).unwrap();
    let stop_words = resources.stop_words();

    assert!(stop_words.contains_token("johnson"));
    assert!(stop_words.contains_token("euro"));
    assert!(stop_words.text().contains('\u{20ac}'));
    assert!(!stop_words.text().contains("census"));

    let lexicon = resources.lexicon();
    assert!(lexicon.is_positive("profit"));
    // fragment of "johnson"
    assert!(!lexicon.is_positive("son"));
    assert!(!lexicon.is_negative("euro"));
    assert_eq!(resources.general_stop_words().len(), 179);
}

#[test]
fn test_token_match_mode_from_config() {
    let dir = TempDir::new().unwrap();
    write_data_root(dir.path());

    let config = config_for(dir.path()).with_stop_word_match(StopWordMatch::Token);
    let resources = Resources::load(&config).unwrap();
    assert!(resources.lexicon().is_positive("son"));
    assert!(!resources.lexicon().is_negative("euro"));
}

#[test]
fn test_missing_master_dictionary_aborts() {
    let dir = TempDir::new().unwrap();
    write_data_root(dir.path());
    fs::remove_file(dir.path().join("MasterDictionary/negative-words.txt")).unwrap();

    let err = AnalysisOrchestrator::from_config(&config_for(dir.path())).unwrap_err();
    assert!(matches!(err, EngineError::LexiconLoad { .. }));
}

#[test]
fn test_missing_stop_word_directory_aborts() {
    let dir = TempDir::new().unwrap();
    write_data_root(dir.path());
    fs::remove_dir_all(dir.path().join("StopWords")).unwrap();

    let err = Resources::load(&config_for(dir.path())).unwrap_err();
    assert!(err.to_string().contains("StopWords"));
}

#[test]
fn test_corpus_batch_report() {
    let dir = TempDir::new().unwrap();
    write_data_root(dir.path());
    let config = config_for(dir.path());

    let orchestrator = AnalysisOrchestrator::from_config(&config).unwrap();
    let docs = load_corpus(config.corpus_path(), config.fallback_encoding().unwrap()).unwrap();
    let report = orchestrator.analyze_batch(&docs).unwrap();

    assert_eq!(report.success_count(), 2);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(report.failures[0].id, DocumentId::Numeric(39));

    let first = &report.records[&DocumentId::Numeric(37)];
    assert_eq!(first.positive_score, 2);
    assert_eq!(first.negative_score, 1);
    assert_eq!(first.polarity_score, 0.33);
    assert_eq!(first.personal_pronouns, 2);
    assert_eq!(first.avg_sentence_length, 5.0);

    let second = &report.records[&DocumentId::Numeric(38)];
    assert_eq!(second.negative_score, 1);
    assert_eq!(second.polarity_score, -1.0);
}

#[test]
fn test_modes_produce_identical_reports() {
    let dir = TempDir::new().unwrap();
    write_data_root(dir.path());
    let config = config_for(dir.path());
    let docs = load_corpus(config.corpus_path(), config.fallback_encoding().unwrap()).unwrap();

    let run = |mode| {
        AnalysisOrchestrator::from_config(&config.clone().with_mode(mode))
            .unwrap()
            .analyze_batch(&docs)
            .unwrap()
    };

    let sequential = run(ExecutionMode::Sequential);
    assert_eq!(sequential, run(ExecutionMode::Parallel));
    assert_eq!(sequential, run(ExecutionMode::Adaptive));
}

#[test]
fn test_config_file_drives_orchestrator() {
    let dir = TempDir::new().unwrap();
    write_data_root(&dir.path().join("data"));
    let config_path = dir.path().join("lexmetrics.toml");
    fs::write(
        &config_path,
        r#"
[resources]
data_root = "data"

[execution]
mode = "sequential"
threads = 2
"#,
    )
    .unwrap();

    let config = EngineConfig::from_file(&config_path).unwrap();
    let orchestrator = AnalysisOrchestrator::from_config(&config).unwrap();
    assert_eq!(orchestrator.mode(), ExecutionMode::Sequential);
    assert_eq!(orchestrator.threads(), 2);
    assert_eq!(corpus_files(config.corpus_path()).unwrap().len(), 3);
}
