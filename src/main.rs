extern crate candidate_grid;
extern crate clap;

use candidate_grid::configuration;
use candidate_grid::dc;
use candidate_grid::defs::PartyRegionIndex;
use candidate_grid::europarl2019;
use candidate_grid::output::{HtmlFileOutput, ReportWriter};
use candidate_grid::render;
use clap::{App, Arg};

fn main() {
    let matches = App::new("candidate-grid")
        .about("renders a published candidate list as a party by region HTML grid")
        .arg(
            Arg::with_name("config")
                .help("report configuration file (TOML)")
                .required(true),
        )
        .arg(
            Arg::with_name("offline")
                .long("offline")
                .help("read the configured local CSV file instead of downloading"),
        )
        .get_matches();

    let config_file = matches.value_of("config").unwrap();
    let task = match configuration::read_config(config_file) {
        Ok(task) => task,
        Err(e) => {
            panic!("Couldn't read configuration: {}", e);
        }
    };

    println!("{}", task.description);

    let rows = if matches.is_present("offline") || task.url.is_none() {
        let csv = match task.csv {
            Some(ref csv) => csv.clone(),
            None => {
                panic!("Offline run requested, but no csv file configured");
            }
        };
        match dc::data::candidates::load(&csv) {
            Ok(rows) => rows,
            Err(error) => {
                panic!("Couldn't read candidates file: {:?}", error);
            }
        }
    } else {
        let url = task.url.as_ref().unwrap();
        match dc::data::candidates::download(url) {
            Ok(rows) => rows,
            Err(error) => {
                panic!("Couldn't download candidate list: {:?}", error);
            }
        }
    };

    println!("{} candidates", rows.len());

    let records = match europarl2019::load_candidate_records(rows) {
        Ok(records) => records,
        Err(error) => {
            panic!("Couldn't convert candidate rows: {}", error);
        }
    };

    let index = PartyRegionIndex::build(records);
    let document = render::render_document(&index, &task.page);

    let writer = HtmlFileOutput::new(&task.html);
    match writer.write_document(&document) {
        Ok(()) => println!("wrote {}", task.html),
        Err(error) => {
            panic!("Couldn't write {}: {:?}", task.html, error);
        }
    }
}
