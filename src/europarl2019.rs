use dc;
use defs::*;
use std::error::Error;

// list positions are published as free text. an empty field means the
// party didn't rank the candidate, which the dataset treats as position 1.
// anything else that doesn't parse is a malformed dataset: abort rather
// than miscount a candidate
fn parse_list_position(field: &str) -> Result<u32, String> {
    if field.is_empty() {
        return Ok(1);
    }
    match field.parse::<u32>() {
        Ok(position) => Ok(position),
        Err(_) => Err(format!("malformed party_list_position {:?}", field)),
    }
}

pub fn load_candidate_records(
    rows: Vec<dc::data::candidates::DCCandidateRow>,
) -> Result<Vec<CandidateRecord>, Box<dyn Error>> {
    let mut records = Vec::with_capacity(rows.len());
    for row in rows.into_iter() {
        let list_position = parse_list_position(&row.party_list_position)
            .map_err(|e| format!("candidate {}: {}", row.id, e))?;
        records.push(CandidateRecord {
            id: row.id,
            name: row.name,
            party_name: row.party_name,
            post_label: row.post_label,
            list_position: list_position,
            gender: row.gender,
            email: row.email,
            twitter_user_id: row.twitter_user_id,
            facebook_page_url: row.facebook_page_url,
            facebook_personal_url: row.facebook_personal_url,
            image_url: row.image_url,
        });
    }
    Ok(records)
}
