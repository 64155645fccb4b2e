use merge_bilingual::config::{ConvertSide, ScriptConversion};
use merge_bilingual::core::{CleanRecord, DirtyRecord, Pipeline};
use merge_bilingual::{CliConfig, MergeEngine, MergeError, MergePipeline};
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn base_config(dir: &TempDir, st: &str, tt: &str) -> CliConfig {
    CliConfig {
        st: write_file(dir, "st.txt", st),
        tt: write_file(dir, "tt.txt", tt),
        output: dir.path().join("clean.csv").to_str().unwrap().to_string(),
        dirty: Some(dir.path().join("dirty.csv").to_str().unwrap().to_string()),
        convert: ScriptConversion::Off,
        convert_side: ConvertSide::Target,
        convert_idiom: false,
        filter_ass_tags: false,
        filter_duplicates: false,
        filter_bilingual: false,
        rules: None,
        verbose: false,
    }
}

fn read_clean(path: &str) -> Vec<CleanRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(|r| r.unwrap()).collect()
}

fn read_dirty(path: &str) -> Vec<DirtyRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(|r| r.unwrap()).collect()
}

#[test]
fn test_end_to_end_merge_with_dirty_output() {
    let dir = TempDir::new().unwrap();
    let config = base_config(
        &dir,
        "Hello world\n00:00:01,000 --> 00:00:02,000\n\nHello <b>world</b>\nGoodbye\n",
        "你好，世界\n00:00:01,000 --> 00:00:02,000\nSomething\n你好世界\n再见\n",
    );
    let clean_path = config.output.clone();
    let dirty_path = config.dirty.clone().unwrap();

    let pipeline = MergePipeline::new(config).unwrap();
    let engine = MergeEngine::new(pipeline);
    let report = engine.run().unwrap();

    assert_eq!(report.total_pairs, 5);
    assert_eq!(report.clean_pairs, 2);
    assert_eq!(report.dirty_pairs, 3);
    assert_eq!(report.clean_pairs + report.dirty_pairs, report.total_pairs);
    assert_eq!(report.reason_counts.get("timecode"), Some(&1));
    assert_eq!(report.reason_counts.get("empty"), Some(&1));
    assert_eq!(report.reason_counts.get("markup"), Some(&1));

    let clean = read_clean(&clean_path);
    assert_eq!(
        clean,
        vec![
            CleanRecord {
                source: "Hello world".to_string(),
                target: "你好，世界".to_string(),
            },
            CleanRecord {
                source: "Goodbye".to_string(),
                target: "再见".to_string(),
            },
        ]
    );

    let dirty = read_dirty(&dirty_path);
    assert_eq!(dirty.len(), 3);
    assert_eq!(dirty[0].reason, "timecode");
    assert_eq!(dirty[1].reason, "empty");
    assert_eq!(dirty[2].reason, "markup");
    assert_eq!(dirty[1].target, "Something");
}

#[test]
fn test_misaligned_inputs_write_no_output() {
    let dir = TempDir::new().unwrap();
    let config = base_config(&dir, "a\nb\nc\n", "x\ny\n");
    let clean_path = config.output.clone();
    let dirty_path = config.dirty.clone().unwrap();

    let pipeline = MergePipeline::new(config).unwrap();
    let err = pipeline.run().unwrap_err();
    match err {
        MergeError::MisalignedInput {
            st_lines, tt_lines, ..
        } => {
            assert_eq!(st_lines, 3);
            assert_eq!(tt_lines, 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    assert!(!Path::new(&clean_path).exists());
    assert!(!Path::new(&dirty_path).exists());
}

#[test]
fn test_missing_input_writes_no_output() {
    let dir = TempDir::new().unwrap();
    let mut config = base_config(&dir, "a\n", "x\n");
    config.st = dir.path().join("missing.txt").to_str().unwrap().to_string();
    let clean_path = config.output.clone();

    let pipeline = MergePipeline::new(config).unwrap();
    let err = pipeline.run().unwrap_err();
    assert!(matches!(err, MergeError::InputNotFound { .. }));
    assert!(!Path::new(&clean_path).exists());
}

#[test]
fn test_dirty_pairs_dropped_when_no_dirty_path() {
    let dir = TempDir::new().unwrap();
    let mut config = base_config(&dir, "Hello\n\n", "你好\nSomething\n");
    config.dirty = None;
    let clean_path = config.output.clone();

    let pipeline = MergePipeline::new(config).unwrap();
    let report = pipeline.run().unwrap();

    assert_eq!(report.total_pairs, 2);
    assert_eq!(report.clean_pairs, 1);
    assert_eq!(report.dirty_pairs, 1);
    assert_eq!(report.dirty_output_path, None);

    // The dirty pair is dropped, not leaked into the clean file.
    let clean = read_clean(&clean_path);
    assert_eq!(clean.len(), 1);
    assert_eq!(clean[0].source, "Hello");
}

#[test]
fn test_clean_rows_round_trip_through_csv() {
    let dir = TempDir::new().unwrap();
    let config = base_config(
        &dir,
        "He said \"hi\", twice\nPlain line\n",
        "他说，\"你好\"\n平凡的一行\n",
    );
    let clean_path = config.output.clone();

    let pipeline = MergePipeline::new(config).unwrap();
    let report = pipeline.run().unwrap();
    assert_eq!(report.clean_pairs, 2);

    let clean = read_clean(&clean_path);
    assert_eq!(clean[0].source, "He said \"hi\", twice");
    assert_eq!(clean[0].target, "他说，\"你好\"");
}

#[test]
fn test_empty_inputs_yield_headed_empty_outputs() {
    let dir = TempDir::new().unwrap();
    let config = base_config(&dir, "", "");
    let clean_path = config.output.clone();
    let dirty_path = config.dirty.clone().unwrap();

    let pipeline = MergePipeline::new(config).unwrap();
    let report = pipeline.run().unwrap();

    assert_eq!(report.total_pairs, 0);
    assert_eq!(report.clean_pairs, 0);
    assert_eq!(report.dirty_pairs, 0);
    assert_eq!(
        std::fs::read_to_string(&clean_path).unwrap().trim(),
        "source,target"
    );
    assert_eq!(
        std::fs::read_to_string(&dirty_path).unwrap().trim(),
        "source,target,reason"
    );
}

#[test]
fn test_corpus_rule_toggles() {
    let dir = TempDir::new().unwrap();
    let mut config = base_config(
        &dir,
        "{\\an8}Hello\nSame line\nHello\nPlain\n",
        "你好\nSame line\n你好世界 Hello\n平凡\n",
    );
    config.filter_ass_tags = true;
    config.filter_duplicates = true;
    config.filter_bilingual = true;
    let dirty_path = config.dirty.clone().unwrap();

    let pipeline = MergePipeline::new(config).unwrap();
    let report = pipeline.run().unwrap();

    assert_eq!(report.clean_pairs, 1);
    assert_eq!(report.dirty_pairs, 3);

    let dirty = read_dirty(&dirty_path);
    let reasons: Vec<&str> = dirty.iter().map(|r| r.reason.as_str()).collect();
    assert_eq!(reasons, vec!["ass-tag", "duplicate", "bilingual"]);
}

#[test]
fn test_script_conversion_applies_to_target_side() {
    let dir = TempDir::new().unwrap();
    let mut config = base_config(&dir, "Conversion\n", "漢字轉換\n");
    config.convert = ScriptConversion::Simplified;
    let clean_path = config.output.clone();

    let pipeline = MergePipeline::new(config).unwrap();
    let report = pipeline.run().unwrap();
    assert_eq!(report.clean_pairs, 1);

    let clean = read_clean(&clean_path);
    assert_eq!(clean[0].source, "Conversion");
    assert_eq!(clean[0].target, "汉字转换");
}
