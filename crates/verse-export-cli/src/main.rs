use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::{
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    process,
};
use verse_export_config::ExportConfig;
use verse_export_engine::{
    BibleBook, ExportRequest, HtmlSink, Notes, RecordingSink, RenderOptions, StaticTranslations,
    Verse, VerseExporter, markdown::plain_text,
};

/// An export request as written by the calling application.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportFile {
    title: String,
    translation_id: String,
    verses: Vec<Verse>,
    #[serde(default)]
    books: Option<Vec<BibleBook>>,
    #[serde(default)]
    notes: Notes,
    #[serde(default)]
    translations: StaticTranslations,
}

impl ExportFile {
    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read export request '{}'", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse export request '{}'", path.display()))
    }

    fn request(&self) -> ExportRequest<'_> {
        let request = ExportRequest::new(
            &self.title,
            &self.translation_id,
            &self.verses,
            &self.notes,
        );
        match &self.books {
            Some(books) => request.with_books(books),
            None => request,
        }
    }
}

fn render_options(config: &ExportConfig) -> RenderOptions {
    RenderOptions {
        heading_base_size: config.heading_base_size,
        excluded_tag: config.excluded_tag.clone(),
        notes_color: config.notes_color().map(str::to_string),
        default_separator: config.default_separator.clone(),
    }
}

/// `<YYYY>_<MM>_<DD>__<title>.html`, with path separators removed from the title.
fn default_file_name(title: &str, date: NaiveDate) -> String {
    let title: String = plain_text(title)
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}__{}.html", date.format("%Y_%m_%d"), title.trim())
}

fn output_path(explicit: Option<&str>, config: &ExportConfig, title: &str) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }
    let dir = config.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    dir.join(default_file_name(title, Local::now().date_naive()))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

async fn export(export_file: &ExportFile, options: RenderOptions, output: &Path) -> Result<()> {
    let exporter = VerseExporter::new(&export_file.translations, options);
    let request = export_file.request();

    if is_json(output) {
        // Raw sink events, for inspecting what a document backend would receive
        let mut sink = RecordingSink::new();
        exporter.render(&request, &mut sink).await?;
        let json = serde_json::to_string_pretty(sink.events())?;
        std::fs::write(output, json)
            .with_context(|| format!("Failed to write '{}'", output.display()))?;
        return Ok(());
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to create '{}'", output.display()))?;
    let mut sink = HtmlSink::begin(BufWriter::new(file), &plain_text(&export_file.title))?;
    exporter.render(&request, &mut sink).await?;
    sink.finish()?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if !(2..=3).contains(&args.len()) {
        eprintln!("Usage: {} <request.json> [output.html|output.json]", args[0]);
        process::exit(1);
    }

    let config = match ExportConfig::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", ExportConfig::config_path().display());
            config
        }
        Ok(None) => ExportConfig::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let export_file = ExportFile::read(Path::new(&args[1]))?;
    let output = output_path(args.get(2).map(String::as_str), &config, &export_file.title);

    export(&export_file, render_options(&config), &output).await?;
    log::info!("Wrote export to {}", output.display());

    Ok(())
}
