mod args;
mod error;

use std::collections::HashMap;

use pvrec_core::{AssociationEngine, Params};
use pvrec_io::batches::resolve_batches;
use pvrec_io::output::TrackletWriter;
use tracing::info;

use error::CliError;

fn main() {
    let _guard = pvrec_tracing_logger::init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let exit_code = match run(&raw_args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("pvrec: {err}");
            err.exit_code()
        }
    };
    std::process::exit(exit_code);
}

fn run(raw_args: &[String]) -> Result<(), CliError> {
    let cli = args::parse(raw_args)?;

    if cli.mode == pvrec_io::batches::InputMode::File && !cli.input_path.is_file() {
        return Err(CliError::NotAFile(cli.input_path.display().to_string()));
    }
    if cli.mode == pvrec_io::batches::InputMode::Directory && !cli.input_path.is_dir() {
        return Err(CliError::NotADirectory(cli.input_path.display().to_string()));
    }
    if !cli.output_dir.is_dir() && std::fs::create_dir_all(&cli.output_dir).is_err() {
        return Err(CliError::CannotCreateOutputDir(
            cli.output_dir.display().to_string(),
        ));
    }

    let params = match &cli.params_file {
        Some(path) => pvrec_io::params_file::load(path)
            .map_err(|e| CliError::InvalidParams(e.to_string()))?,
        None => Params::default(),
    };

    let batch_files = resolve_batches(&cli.input_path, cli.mode).unwrap_or_default();

    let mut engine = AssociationEngine::new();
    let mut writer = TrackletWriter::new(&cli.output_dir);
    let mut total = 0usize;

    for file in &batch_files {
        info!(file = %file.display(), "processing input file");
        let contents = match std::fs::File::open(file) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("pvrec: skipping unreadable file {}: {e}", file.display());
                continue;
            }
        };
        let parsed = match pvrec_io::input::parse(contents) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("pvrec: skipping unparseable file {}: {e}", file.display());
                continue;
            }
        };
        if parsed.malformed_lines > 0 {
            info!(
                file = %file.display(),
                malformed = parsed.malformed_lines,
                "skipped malformed input lines"
            );
        }

        let mut by_camera: HashMap<i64, Vec<pvrec_core::Detection>> = HashMap::new();
        for record in parsed.records {
            by_camera.entry(record.camera_id).or_default().push(record.detection);
        }

        let mut file_object_count = 0usize;
        for (cam_id, detections) in by_camera {
            engine.set_params(params.clone());
            engine.begin_batch(cam_id);
            for d in detections {
                engine.push_detection(d);
            }
            engine.end_batch();

            let (_, objects) = engine.objects();
            for object in objects {
                if let Err(e) = writer.write_object(object) {
                    eprintln!("pvrec: failed to write tracklet: {e}");
                    continue;
                }
                file_object_count += 1;
            }
        }

        info!(
            file = %file.display(),
            objects = file_object_count,
            "objects written from file"
        );
        total += file_object_count;
    }

    info!(total, "pvrec run complete");
    Ok(())
}
