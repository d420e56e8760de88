use defs::*;
use itertools::Itertools;

// display-mode vocabularies for the client-side toggles. the identifiers
// and their order are a contract with the stylesheet: emit each exactly
// once, spelled exactly like this
pub const SHOW_SETTINGS: [&str; 6] = ["gender", "email", "twitter", "facebook", "image", "contact"];
pub const TOP_SETTINGS: [&str; 3] = ["yes", "two", "no"];

const DEFAULT_SHOW: &str = "contact";
const DEFAULT_TOP: &str = "no";

const PROFILE_URL: &str = "https://whocanivotefor.co.uk/person/";

pub const DEFAULT_STYLESHEET: &str =
    "<link href=\"eu-candidate-grid.css\" rel=\"stylesheet\" type=\"text/css\" />";

pub const DEFAULT_SCRIPT: &str = "<script>document.addEventListener(\"click\", function (event) { var target = event.target; if (!target.classList || !target.classList.contains(\"heading\")) { return; } var grid = document.querySelector(\".candidate-grid\"); if (target.hasAttribute(\"data-show\")) { grid.setAttribute(\"data-show\", target.getAttribute(\"data-show\")); } if (target.hasAttribute(\"data-top\")) { grid.setAttribute(\"data-top\", target.getAttribute(\"data-top\")); } event.preventDefault(); });</script>";

pub const DEFAULT_ATTRIBUTION: &str = "<p class=\"attribution\">Candidate data crowdsourced by <a href=\"https://candidates.democracyclub.org.uk/\">Democracy Club</a> volunteers.</p>";

// boilerplate fragments emitted verbatim around the grid; opaque to the
// renderer, supplied by configuration
#[derive(Debug, Clone)]
pub struct PageBoilerplate {
    pub stylesheet: String,
    pub script: String,
    pub attribution: String,
}

impl Default for PageBoilerplate {
    fn default() -> PageBoilerplate {
        PageBoilerplate {
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

// party and post names come from a crowdsourced dataset; escape anything
// that would break out of text or a double-quoted attribute
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// one column per distinct post label, lexicographic; fixed for the whole
// document, so every party row lines up
pub fn column_labels(index: &PartyRegionIndex) -> Vec<String> {
    let mut labels: Vec<String> = index
        .buckets()
        .keys()
        .map(|key| key.1.clone())
        .unique()
        .collect();
    labels.sort();
    labels
}

// parties with more candidates come first; name breaks ties
pub fn party_order(index: &PartyRegionIndex) -> Vec<String> {
    let mut parties: Vec<(usize, String)> = index
        .buckets()
        .keys()
        .map(|key| key.0.clone())
        .unique()
        .map(|party| {
            let total = index.party_total(&party);
            (total, party)
        })
        .collect();
    parties.sort_by(|a, b| (b.0, &a.1).cmp(&(a.0, &b.1)));
    parties.into_iter().map(|entry| entry.1).collect()
}

// class token order is a contract with the stylesheet
fn candidate_entry(candidate: &CandidateRecord) -> String {
    let yes_no = |present: bool| if present { "yes" } else { "no" };
    let class_list = [
        "candidate".to_string(),
        format!("pos-{}", candidate.list_position),
        format!("gender-{}", escape(&candidate.gender)),
        format!("twitter-{}", yes_no(!candidate.twitter_user_id.is_empty())),
        format!(
            "facebook-{}",
            yes_no(
                !candidate.facebook_page_url.is_empty()
                    || !candidate.facebook_personal_url.is_empty()
            )
        ),
        format!("image-{}", yes_no(!candidate.image_url.is_empty())),
        format!("email-{}", yes_no(!candidate.email.is_empty())),
    ];
    format!(
        "<a href=\"{url}{id}/\" title=\"{name}\" class=\"{classes}\"></a>",
        url = PROFILE_URL,
        id = escape(&candidate.id),
        name = escape(&candidate.name),
        classes = class_list.join(" ")
    )
}

// the document, in emission order: boilerplate, toggle container, the two
// heading rows, then one table row per party with one cell per column.
// pure function of the index: rendering twice gives identical fragments
pub fn render(index: &PartyRegionIndex, page: &PageBoilerplate) -> Vec<String> {
    let columns = column_labels(index);
    let parties = party_order(index);

    let mut fragments = Vec::new();
    fragments.push(page.stylesheet.clone());
    fragments.push(page.script.clone());
    fragments.push(format!(
        "<div class=\"candidate-grid\" data-show=\"{}\" data-top=\"{}\">",
        DEFAULT_SHOW, DEFAULT_TOP
    ));

    fragments.push("<div class=\"headings\">".to_string());
    for setting in SHOW_SETTINGS.iter() {
        fragments.push(format!(
            "<a class=\"heading heading-{setting}\" href=\"#\" data-show=\"{setting}\">{setting}</a>",
            setting = setting
        ));
    }
    fragments.push("</div>".to_string());

    fragments.push("<div class=\"headings\">".to_string());
    for setting in TOP_SETTINGS.iter() {
        fragments.push(format!(
            "<a class=\"heading heading-top-{setting}\" href=\"#\" data-top=\"{setting}\">{setting}</a>",
            setting = setting
        ));
    }
    fragments.push("</div>".to_string());

    fragments.push("<table>".to_string());
    for party in &parties {
        fragments.push(format!("<tr class=\"party-{}\">", escape(party)));
        fragments.push(format!("<th>{}</th>", escape(party)));
        for column in &columns {
            fragments.push("<td>".to_string());
            if let Some(bucket) = index.bucket(party, column) {
                for candidate in bucket {
                    fragments.push(candidate_entry(candidate));
                }
            }
            fragments.push("</td>".to_string());
        }
        fragments.push("</tr>".to_string());
    }
    fragments.push("</table>".to_string());
    fragments.push("</div>".to_string());
    fragments.push(page.attribution.clone());
    fragments
}

pub fn render_document(index: &PartyRegionIndex, page: &PageBoilerplate) -> String {
    render(index, page).concat()
}
