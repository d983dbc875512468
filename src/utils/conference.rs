//! Conference slug and proceedings URL utilities
//!
//! Slugs are human-friendly identifiers in the format: {VENUE}{YEAR}
//! Examples: CVPR2023, CVPR2024

/// Venue whose proceedings are scraped
pub const VENUE: &str = "CVPR";

/// Placeholder substituted by [`proceedings_url`]
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Default proceedings listing, one page per year with every paper on it
pub const DEFAULT_URL_TEMPLATE: &str = "https://openaccess.thecvf.com/CVPR{year}?day=all";

/// Earliest and latest years accepted anywhere a year is parsed
pub const MIN_YEAR: i32 = 1983;
pub const MAX_YEAR: i32 = 2100;

pub fn is_supported_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Parse a conference slug into its year
///
/// # Examples
/// ```
/// use cvpr_contributors::utils::parse_conference_slug;
///
/// assert_eq!(parse_conference_slug("CVPR2024"), Some(2024));
/// assert_eq!(parse_conference_slug("cvpr2023"), Some(2023)); // case insensitive
/// assert_eq!(parse_conference_slug("ICCV2023"), None);
/// assert_eq!(parse_conference_slug("CVPR"), None); // missing year
/// ```
pub fn parse_conference_slug(slug: &str) -> Option<i32> {
    let slug_upper = slug.trim().to_uppercase();
    let year_str = slug_upper.strip_prefix(VENUE)?;
    let year = year_str.parse::<i32>().ok()?;
    is_supported_year(year).then_some(year)
}

/// Generate a slug from a year
///
/// # Examples
/// ```
/// use cvpr_contributors::utils::make_conference_slug;
///
/// assert_eq!(make_conference_slug(2024), "CVPR2024");
/// ```
pub fn make_conference_slug(year: i32) -> String {
    format!("{}{}", VENUE, year)
}

/// Substitute `year` into a proceedings URL template
///
/// # Examples
/// ```
/// use cvpr_contributors::utils::{proceedings_url, DEFAULT_URL_TEMPLATE};
///
/// assert_eq!(
///     proceedings_url(DEFAULT_URL_TEMPLATE, 2023),
///     "https://openaccess.thecvf.com/CVPR2023?day=all"
/// );
/// ```
pub fn proceedings_url(template: &str, year: i32) -> String {
    template.replace(YEAR_PLACEHOLDER, &year.to_string())
}
