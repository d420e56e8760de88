use render;
use std::fs::File;
use std::io::Read;
use toml;

#[derive(Debug, Deserialize)]
struct Source {
    url: Option<String>,
    csv: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Output {
    html: String,
}

#[derive(Debug, Default, Deserialize)]
struct Page {
    stylesheet: Option<String>,
    script: Option<String>,
    attribution: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Config {
    description: String,
    source: Source,
    output: Output,
    page: Option<Page>,
}

fn config_contents(input_file: &str) -> Result<Config, String> {
    let mut fd = match File::open(input_file) {
        Ok(fd) => fd,
        Err(e) => return Err(format!("unable to read {}: {}", input_file, e)),
    };

    let mut buf = String::new();
    if let Err(e) = fd.read_to_string(&mut buf) {
        return Err(format!("unable to read {}: {}", input_file, e));
    }

    let config: Config = match toml::from_str(&buf) {
        Ok(c) => c,
        Err(e) => return Err(format!("unable to parse {}: {}", input_file, e)),
    };

    Ok(config)
}

#[derive(Debug, Clone)]
pub struct ReportTask {
    pub description: String,
    pub url: Option<String>,
    pub csv: Option<String>,
    pub html: String,
    pub page: render::PageBoilerplate,
}

pub fn read_config(input_file: &str) -> Result<ReportTask, String> {
    let config = config_contents(input_file)?;
    if config.source.url.is_none() && config.source.csv.is_none() {
        return Err(format!(
            "{}: source requires a url or a csv file",
            input_file
        ));
    }
    let page = config.page.unwrap_or_default();
    Ok(ReportTask {
        description: config.description,
        url: config.source.url,
        csv: config.source.csv,
        html: config.output.html,
        page: render::PageBoilerplate {
            stylesheet: page
                .stylesheet
                .unwrap_or_else(|| render::DEFAULT_STYLESHEET.to_string()),
            script: page
                .script
                .unwrap_or_else(|| render::DEFAULT_SCRIPT.to_string()),
            attribution: page
                .attribution
                .unwrap_or_else(|| render::DEFAULT_ATTRIBUTION.to_string()),
        },
    })
}
