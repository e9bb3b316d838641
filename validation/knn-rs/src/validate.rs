use knn_rs::prelude::*;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct ValidationReport {
    name: String,
    records: usize,
    features: usize,
    target_columns: Vec<String>,
    labels: Vec<String>,
    ks: Vec<usize>,
    panels: Vec<Panel>,
}

#[derive(Debug, Serialize)]
struct Panel {
    hold_out: usize,
    series: Vec<Series>,
}

#[derive(Debug, Serialize)]
struct Series {
    label: String,
    c_index: Vec<Option<f64>>,
}

struct LoadedData {
    header: Vec<String>,
    dataset: Dataset<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("../data");
    let output_dir = Path::new("../output/knn_rs");

    let mut inputs: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if inputs.is_empty() {
        if !input_dir.exists() {
            eprintln!(
                "Input directory {:?} does not exist. Pass CSV files as arguments instead.",
                input_dir
            );
            return Ok(());
        }
        for entry in fs::read_dir(input_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("csv") {
                inputs.push(path);
            }
        }
        inputs.sort();
    }

    fs::create_dir_all(output_dir)?;

    let sweep = Knn::new().parallel(true).build()?;
    for path in &inputs {
        println!("Processing {:?}", path.file_name().unwrap_or(path.as_os_str()));
        process_file(path, output_dir, &sweep)?;
    }

    Ok(())
}

fn load_csv(path: &Path) -> Result<LoadedData, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let header = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }

    let dataset = Dataset::from_rows(&rows)?;
    Ok(LoadedData { header, dataset })
}

fn process_file(
    input_path: &Path,
    output_dir: &Path,
    sweep: &KnnSweep,
) -> Result<(), Box<dyn Error>> {
    let data = load_csv(input_path)?;
    let standardized = standardize(&data.dataset);

    let table = sweep.run(&standardized)?;
    println!("{}", table);

    for d in table.degenerate() {
        eprintln!(
            "warning: c-index undefined for {} at k={}, hold_out={}",
            table.labels()[d.dimension],
            d.k,
            d.hold_out
        );
    }

    let labels = table.labels();
    let panels = table
        .hold_outs()
        .iter()
        .filter_map(|&hold_out| {
            let panel = table.panel(hold_out)?;
            let series = labels
                .iter()
                .zip(panel)
                .map(|(label, scores)| Series {
                    label: label.to_string(),
                    c_index: scores
                        .into_iter()
                        .map(|s| if s.is_nan() { None } else { Some(s) })
                        .collect(),
                })
                .collect();
            Some(Panel { hold_out, series })
        })
        .collect();

    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset")
        .to_string();

    let report = ValidationReport {
        name: stem.clone(),
        records: standardized.len(),
        features: standardized.n_features(),
        target_columns: data.header.iter().take(TARGETS).cloned().collect(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        ks: table.ks().to_vec(),
        panels,
    };

    let output_path = output_dir.join(format!("{}.json", stem));
    let output_json = serde_json::to_string_pretty(&report)?;
    fs::write(output_path, output_json)?;

    Ok(())
}
