//! Synthetic fixtures shaped exactly like the real preprocessed corpora.
//!
//! The generators produce tables at the true row counts with every
//! categorical value represented, unique filenames, and clean text, so the
//! corpus profiles pass end-to-end. Mutation helpers let individual tests
//! break one invariant at a time.

#![allow(dead_code)] // each test binary uses a subset of the fixtures

use emocorpus::corpus::{iemocap, meld, union};
use emocorpus::{Column, Frame, Value};

/// Route library logs to the test harness
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// IEMOCAP emotion codes and their full labels
pub const IEMOCAP_CODES: [(&str, &str); 11] = [
    ("ang", "anger"),
    ("dis", "disgust"),
    ("exc", "excited"),
    ("fea", "fear"),
    ("fru", "frustration"),
    ("hap", "happiness"),
    ("neu", "neutral"),
    ("oth", "other"),
    ("sad", "sadness"),
    ("sur", "surprise"),
    ("xxx", "unknown"),
];

/// MELD's seven emotion labels
pub const MELD_EMOTIONS: [&str; 7] = [
    "anger",
    "disgust",
    "fear",
    "joy",
    "neutral",
    "sadness",
    "surprise",
];

const MELD_SPEAKERS: [&str; 6] = ["Ross", "Rachel", "Joey", "Monica", "Chandler", "Phoebe"];

pub fn iemocap_frame() -> Frame {
    let rows = iemocap::ROWS;
    let mut filename = Vec::with_capacity(rows);
    let mut filepath = Vec::with_capacity(rows);
    let mut emotion = Vec::with_capacity(rows);
    let mut transcription = Vec::with_capacity(rows);
    let mut emotion_label = Vec::with_capacity(rows);
    let mut gender = Vec::with_capacity(rows);
    let mut method = Vec::with_capacity(rows);
    let mut session = Vec::with_capacity(rows);

    for i in 0..rows {
        let ses = (i % iemocap::SESSIONS) + 1;
        let g = if i % 2 == 0 { "M" } else { "F" };
        let m = if (i / 2) % 2 == 0 { "impro" } else { "script" };
        let (code, label) = IEMOCAP_CODES[i % IEMOCAP_CODES.len()];

        let name = format!("Ses0{}{}_{}_{:05}.wav", ses, g, m, i);
        filepath.push(format!("data/iemocap/session{}/{}", ses, name));
        filename.push(name);
        emotion.push(code);
        transcription.push(format!("spoken line number {}", i));
        emotion_label.push(label);
        gender.push(g);
        method.push(m);
        session.push(ses as i64);
    }

    Frame::new(vec![
        Column::text("filename", filename),
        Column::text("filepath", filepath),
        Column::text("emotion", emotion),
        Column::text("transcription", transcription),
        Column::text("dataset", vec!["iemocap"; rows]),
        Column::text("emotion_label", emotion_label),
        Column::text("gender", gender),
        Column::text("method", method),
        Column::int("session", session),
    ])
    .unwrap()
}

/// One MELD split with its twelve columns
pub fn meld_split(split: &str, rows: usize) -> Frame {
    let mut sr_no = Vec::with_capacity(rows);
    let mut utterance = Vec::with_capacity(rows);
    let mut speaker = Vec::with_capacity(rows);
    let mut emotion = Vec::with_capacity(rows);
    let mut sentiment = Vec::with_capacity(rows);
    let mut dialogue_id = Vec::with_capacity(rows);
    let mut utterance_id = Vec::with_capacity(rows);
    let mut season = Vec::with_capacity(rows);
    let mut episode = Vec::with_capacity(rows);
    let mut start_time = Vec::with_capacity(rows);
    let mut end_time = Vec::with_capacity(rows);
    let mut filename = Vec::with_capacity(rows);

    for i in 0..rows {
        sr_no.push((i + 1) as i64);
        utterance.push(format!("utterance {} of {}", i, split));
        speaker.push(MELD_SPEAKERS[i % MELD_SPEAKERS.len()]);
        emotion.push(MELD_EMOTIONS[i % MELD_EMOTIONS.len()]);
        sentiment.push(["negative", "neutral", "positive"][i % 3]);
        dialogue_id.push((i / 10) as i64);
        utterance_id.push((i % 10) as i64);
        season.push(((i % 10) + 1) as i64);
        episode.push(((i % 24) + 1) as i64);
        start_time.push(format!("00:{:02}:{:02},000", (i / 60) % 60, i % 60));
        end_time.push(format!("00:{:02}:{:02},900", (i / 60) % 60, i % 60));
        filename.push(format!("dia{}_utt{}_{}.wav", i / 10, i % 10, split));
    }

    Frame::new(vec![
        Column::int("Sr No.", sr_no),
        Column::text("Utterance", utterance),
        Column::text("Speaker", speaker),
        Column::text("Emotion", emotion),
        Column::text("Sentiment", sentiment),
        Column::int("Dialogue_ID", dialogue_id),
        Column::int("Utterance_ID", utterance_id),
        Column::int("Season", season),
        Column::int("Episode", episode),
        Column::text("StartTime", start_time),
        Column::text("EndTime", end_time),
        Column::text("filename", filename),
    ])
    .unwrap()
}

/// Concatenate frames that share a schema, in order
pub fn concat(frames: &[&Frame]) -> Frame {
    let names = frames[0].column_names();
    let columns: Vec<Column> = names
        .iter()
        .map(|name| {
            let mut values = Vec::new();
            for frame in frames {
                values.extend(frame.column(name).unwrap().values().iter().cloned());
            }
            Column::new(*name, values)
        })
        .collect();
    Frame::new(columns).unwrap()
}

pub fn meld_corpus() -> meld::MeldCorpus {
    let train = meld_split("train", meld::TRAIN_ROWS);
    let dev = meld_split("dev", meld::DEV_ROWS);
    let test = meld_split("test", meld::TEST_ROWS);

    let mut combined = concat(&[&train, &dev, &test]);

    // the preprocessing step tags each row with its split and audio path
    let mut data = Vec::with_capacity(meld::TOTAL_ROWS);
    for (split, rows) in [
        ("train", meld::TRAIN_ROWS),
        ("dev", meld::DEV_ROWS),
        ("test", meld::TEST_ROWS),
    ] {
        data.extend(std::iter::repeat(split.to_string()).take(rows));
    }
    let filepath: Vec<String> = combined
        .column("filename")
        .unwrap()
        .iter_text()
        .zip(&data)
        .map(|(name, split)| format!("data/meld/{}/{}", split, name.unwrap()))
        .collect();

    let mut columns: Vec<Column> = combined.columns().to_vec();
    columns.push(Column::text("Data", data));
    columns.push(Column::text("filepath", filepath));
    combined = Frame::new(columns).unwrap();

    meld::MeldCorpus {
        train,
        dev,
        test,
        combined,
    }
}

fn union_split(split: &str, rows: usize, offset: usize) -> Frame {
    let mut filename = Vec::with_capacity(rows);
    let mut filepath = Vec::with_capacity(rows);
    let mut dataset = Vec::with_capacity(rows);
    let mut emotion_label = Vec::with_capacity(rows);
    let mut emotion_num = Vec::with_capacity(rows);
    let mut text = Vec::with_capacity(rows);
    let mut clean_text = Vec::with_capacity(rows);
    let mut asr_text = Vec::with_capacity(rows);
    let mut asr_clean_text = Vec::with_capacity(rows);
    let mut speaker = Vec::with_capacity(rows);

    for i in 0..rows {
        let g = offset + i;
        let label = union::EMOTIONS[g % union::EMOTIONS.len()];
        let source = if g % 2 == 0 { "iemocap" } else { "meld" };

        filename.push(format!("utt_{:05}.wav", g));
        filepath.push(format!("data/union/{}/utt_{:05}.wav", source, g));
        dataset.push(source);
        emotion_label.push(label);
        emotion_num.push(union::emotion_num(label).unwrap());
        text.push(format!("reference transcription {}", g));
        clean_text.push(format!("reference transcription {}", g));
        asr_text.push(format!("asr transcription {}", g));
        asr_clean_text.push(format!("asr transcription {}", g));
        speaker.push(format!("spk{:02}", g % 12));
    }

    Frame::new(vec![
        Column::text("filename", filename),
        Column::text("filepath", filepath),
        Column::text("dataset", dataset),
        Column::text("emotion_label", emotion_label),
        Column::int("emotion_num", emotion_num),
        Column::text("text", text),
        Column::text("clean_text", clean_text),
        Column::text("asr_text", asr_text),
        Column::text("asr_clean_text", asr_clean_text),
        Column::text("split", vec![split; rows]),
        Column::text("speaker", speaker),
    ])
    .unwrap()
}

pub fn union_corpus() -> union::UnionCorpus {
    let train = union_split("train", union::TRAIN_ROWS, 0);
    let validation = union_split("validation", union::VALIDATION_ROWS, union::TRAIN_ROWS);
    let test = union_split(
        "test",
        union::TEST_ROWS,
        union::TRAIN_ROWS + union::VALIDATION_ROWS,
    );
    let combined = concat(&[&train, &validation, &test]);

    union::UnionCorpus {
        iemocap: iemocap_frame(),
        meld: meld_corpus().combined,
        combined,
        train,
        validation,
        test,
    }
}

/// Copy of `frame` with one cell replaced
pub fn with_cell(frame: &Frame, column: &str, row: usize, value: Value) -> Frame {
    let columns: Vec<Column> = frame
        .columns()
        .iter()
        .map(|c| {
            if c.name() == column {
                let mut values = c.values().to_vec();
                values[row] = value.clone();
                Column::new(c.name(), values)
            } else {
                c.clone()
            }
        })
        .collect();
    Frame::new(columns).unwrap()
}

/// Copy of `frame` with every text cell of `column` rewritten
pub fn map_text(frame: &Frame, column: &str, f: impl Fn(&str) -> String) -> Frame {
    let columns: Vec<Column> = frame
        .columns()
        .iter()
        .map(|c| {
            if c.name() == column {
                let values = c
                    .values()
                    .iter()
                    .map(|v| match v.as_str() {
                        Some(s) => Value::Text(f(s)),
                        None => v.clone(),
                    })
                    .collect();
                Column::new(c.name(), values)
            } else {
                c.clone()
            }
        })
        .collect();
    Frame::new(columns).unwrap()
}

/// Copy of `frame` without the named column
pub fn drop_column(frame: &Frame, column: &str) -> Frame {
    let columns: Vec<Column> = frame
        .columns()
        .iter()
        .filter(|c| c.name() != column)
        .cloned()
        .collect();
    Frame::new(columns).unwrap()
}

/// Copy of the first `rows` rows of `frame`
pub fn truncated(frame: &Frame, rows: usize) -> Frame {
    let columns: Vec<Column> = frame
        .columns()
        .iter()
        .map(|c| Column::new(c.name(), c.values()[..rows].to_vec()))
        .collect();
    Frame::new(columns).unwrap()
}
