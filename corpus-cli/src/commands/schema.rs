//! Schema command implementation

use anyhow::Result;
use colored::Colorize;
use emocorpus::corpus::{iemocap, meld, union, SchemaField};
use serde::Serialize;

use crate::output;
use crate::CorpusArg;

#[derive(Serialize)]
struct FieldInfo {
    name: String,
    dtype: String,
}

#[derive(Serialize)]
struct ConstantInfo {
    name: &'static str,
    value: usize,
}

#[derive(Serialize)]
struct SchemaInfo {
    corpus: &'static str,
    columns: Vec<FieldInfo>,
    constants: Vec<ConstantInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    vocabulary: Vec<&'static str>,
}

/// Show the expected schema and structural constants for a corpus
pub fn schema(corpus: CorpusArg) -> Result<()> {
    let info = match corpus {
        CorpusArg::Iemocap => SchemaInfo {
            corpus: "iemocap",
            columns: fields(&iemocap::schema()),
            constants: vec![
                ConstantInfo { name: "rows", value: iemocap::ROWS },
                ConstantInfo { name: "columns", value: iemocap::COLUMNS },
                ConstantInfo { name: "emotions", value: iemocap::EMOTION_KINDS },
                ConstantInfo { name: "sessions", value: iemocap::SESSIONS },
                ConstantInfo { name: "genders", value: iemocap::GENDERS },
                ConstantInfo { name: "methods", value: iemocap::METHODS },
            ],
            vocabulary: Vec::new(),
        },
        CorpusArg::Meld => SchemaInfo {
            corpus: "meld",
            columns: fields(&meld::combined_schema()),
            constants: vec![
                ConstantInfo { name: "train_rows", value: meld::TRAIN_ROWS },
                ConstantInfo { name: "dev_rows", value: meld::DEV_ROWS },
                ConstantInfo { name: "test_rows", value: meld::TEST_ROWS },
                ConstantInfo { name: "total_rows", value: meld::TOTAL_ROWS },
                ConstantInfo { name: "split_columns", value: meld::SPLIT_COLUMNS },
                ConstantInfo { name: "emotions", value: meld::EMOTION_KINDS },
                ConstantInfo { name: "sentiments", value: meld::SENTIMENT_KINDS },
                ConstantInfo { name: "data_splits", value: meld::DATA_SPLITS },
            ],
            vocabulary: Vec::new(),
        },
        CorpusArg::Union => SchemaInfo {
            corpus: "union",
            columns: fields(&union::schema()),
            constants: vec![
                ConstantInfo { name: "rows", value: union::ROWS },
                ConstantInfo { name: "columns", value: union::COLUMNS },
                ConstantInfo { name: "train_rows", value: union::TRAIN_ROWS },
                ConstantInfo { name: "validation_rows", value: union::VALIDATION_ROWS },
                ConstantInfo { name: "test_rows", value: union::TEST_ROWS },
                ConstantInfo { name: "emotions", value: union::EMOTIONS.len() },
            ],
            vocabulary: union::EMOTIONS.to_vec(),
        },
    };

    if output::text_mode() {
        println!("Corpus: {}", info.corpus.bold());
        println!();
        println!("Expected columns:");
        for column in &info.columns {
            println!("  {:<16} {}", column.name, column.dtype);
        }
        println!();
        println!("Constants:");
        for constant in &info.constants {
            println!("  {:<18} {}", constant.name, constant.value);
        }
        if !info.vocabulary.is_empty() {
            println!();
            println!("Emotion vocabulary: {}", info.vocabulary.join(", "));
        }
    } else {
        output::print_output(&info)?;
    }

    Ok(())
}

fn fields(schema: &[SchemaField]) -> Vec<FieldInfo> {
    schema
        .iter()
        .map(|(name, dtype)| FieldInfo {
            name: (*name).to_string(),
            dtype: dtype.to_string(),
        })
        .collect()
}
