use crate::cut::FieldOrder;
use crate::range::{FieldRangeSet, ParseRangeError};

use clap::{App, Arg, ArgMatches};
use tracing::{debug, warn};

static FIELDS: &str = "fields";
static INPUT: &str = "input";
static SORTED: &str = "sorted";
static USAGE: &str = "tabcut [OPTIONS] <fields>...";

pub(crate) struct Args {
    pub(crate) ranges: FieldRangeSet,
    pub(crate) order: FieldOrder,
    pub(crate) inputs: Vec<String>,
}

pub(crate) fn get_matches<'a>() -> ArgMatches<'a> {
    get_app().get_matches()
}

fn get_app<'a, 'b>() -> App<'a, 'b> {
    App::new("tabcut")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Selects fields from tab or multi-space separated lines.")
        .usage(USAGE)
        .arg(
            Arg::with_name(FIELDS)
                .index(1)
                .value_name("fields")
                .help(
                    "Fields to select, numbered from zero. Each is a single field (\"2\") or an \
                     inclusive range (\"3-5\").",
                )
                .multiple(true)
                .required(true)
        )
        .arg(
            Arg::with_name(INPUT)
                .short("i")
                .long("input")
                .value_name("file")
                .help("Input to read. May be repeated. Use '-' to indicate stdin.")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .display_order(0)
        )
        .arg(
            Arg::with_name(SORTED)
                .short("s")
                .long("sorted")
                .help("Select fields in ascending order, regardless of the order they were given in.")
                .takes_value(false)
                .display_order(1)
        )
}

pub(crate) fn parse_args(matches: &ArgMatches) -> Result<Args, ParseRangeError> {
    // Safe to unwrap FIELDS since it is required.
    let ranges = FieldRangeSet::parse_all(matches.values_of(FIELDS).unwrap())?;
    debug!(?ranges, "parsed field ranges");
    for range in ranges.ranges().iter().filter(|r| r.is_empty()) {
        warn!(?range, "descending field range selects no fields");
    }

    let order = if matches.is_present(SORTED) {
        FieldOrder::Ascending
    } else {
        FieldOrder::AsGiven
    };

    // Read stdin when no input is given.
    let inputs = matches.values_of(INPUT).map_or_else(
        || vec![String::from("-")],
        |values| values.map(String::from).collect(),
    );
    Result::Ok(Args {
        ranges,
        order,
        inputs,
    })
}
