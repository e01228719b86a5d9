use payvault_core::models::{Level, MAX_FONT_SIZE, MIN_FONT_SIZE, MatchMode, SortCriterion};

pub(super) fn parse_min_one_usize(raw: &str) -> std::result::Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("invalid integer value '{raw}'"))?;
    if value == 0 {
        return Err("value must be >= 1".to_string());
    }
    Ok(value)
}

pub(super) fn parse_sort(raw: &str) -> std::result::Result<SortCriterion, String> {
    raw.parse::<SortCriterion>().map_err(|err| err.to_string())
}

pub(super) fn parse_match_mode(raw: &str) -> std::result::Result<MatchMode, String> {
    raw.parse::<MatchMode>().map_err(|err| err.to_string())
}

pub(super) fn parse_level(raw: &str) -> std::result::Result<Level, String> {
    raw.parse::<Level>().map_err(|err| err.to_string())
}

pub(super) fn parse_font_size(raw: &str) -> std::result::Result<u16, String> {
    let value = raw
        .parse::<u16>()
        .map_err(|_| format!("invalid integer value '{raw}'"))?;
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&value) {
        return Err(format!(
            "font size must be within [{MIN_FONT_SIZE}, {MAX_FONT_SIZE}], got {value}"
        ));
    }
    Ok(value)
}
