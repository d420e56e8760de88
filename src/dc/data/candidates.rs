//
// Fetch and parse a Democracy Club candidate list CSV export.
// Example file: https://candidates.democracyclub.org.uk/media/candidates-europarl.2019-05-23.csv
//

use csv;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::time::Duration;
use ureq;

// covers the whole request, connect included
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// the published exports run to a few megabytes; cap the body read so a
// misbehaving server can't exhaust memory
const MAX_RESPONSE_SIZE: u64 = 32 * 1024 * 1024;

// the export carries more columns than these; serde ignores the rest,
// and absent optional columns read as empty strings
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DCCandidateRow {
    pub id: String,
    pub name: String,
    pub party_name: String,
    pub post_label: String,
    pub party_list_position: String,
    pub gender: String,
    pub email: String,
    pub twitter_user_id: String,
    pub facebook_page_url: String,
    pub facebook_personal_url: String,
    pub image_url: String,
}

pub fn read<R: Read>(reader: R) -> Result<Vec<DCCandidateRow>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows: Vec<DCCandidateRow> = Vec::new();
    for result in rdr.deserialize() {
        let record: DCCandidateRow = result?;
        rows.push(record);
    }
    Ok(rows)
}

pub fn load(filename: &str) -> Result<Vec<DCCandidateRow>, Box<dyn Error>> {
    let f = File::open(filename)?;
    read(f)
}

fn agent() -> ureq::Agent {
    let tls_config = ureq::tls::TlsConfig::builder()
        .provider(ureq::tls::TlsProvider::NativeTls)
        .root_certs(ureq::tls::RootCerts::PlatformVerifier)
        .build();
    ureq::Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

pub fn download(url: &str) -> Result<Vec<DCCandidateRow>, Box<dyn Error>> {
    let body = agent()
        .get(url)
        .call()?
        .into_body()
        .with_config()
        .limit(MAX_RESPONSE_SIZE)
        .read_to_string()?;
    read(body.as_bytes())
}
