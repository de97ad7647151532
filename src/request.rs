// Availability request extraction: XML -> typed, validated field set
use std::fmt;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::config::MarketConfig;
use crate::error::ValidationError;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

// Sample request shipped with the crate (relative to the crate root)
pub const SAMPLE_REQUEST_PATH: &str = "samples/availability_request.xml";

/// Source of the current calendar date for lead-time checks.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// Fully validated request. Only produced when every required field is
// present and the date rules hold.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtractedRequest {
    pub language_code: String,
    pub options_quota: u32,
    pub search_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub currency: String,
    pub nationality: String,
    pub password: String,
    pub username: String,
    pub company_id: i64,
}

impl ExtractedRequest {
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

impl fmt::Debug for ExtractedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractedRequest")
            .field("language_code", &self.language_code)
            .field("options_quota", &self.options_quota)
            .field("search_type", &self.search_type)
            .field("start_date", &self.start_date)
            .field("end_date", &self.end_date)
            .field("currency", &self.currency)
            .field("nationality", &self.nationality)
            .field("password", &"***")
            .field("username", &self.username)
            .field("company_id", &self.company_id)
            .finish()
    }
}

pub trait RequestParser: Send + Sync {
    fn parse(&self, raw_xml: &str) -> Result<ExtractedRequest, ValidationError>;
}

// Leaf values as found in the document. `Some("")` means the element was
// present but empty.
#[derive(Debug, Default)]
struct RawFields {
    language_code: Option<String>,
    options_quota: Option<String>,
    search_type: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    currency: Option<String>,
    nationality: Option<String>,
    parameter: Option<RawParameter>,
}

#[derive(Debug, Default)]
struct RawParameter {
    username: Option<String>,
    password: Option<String>,
    company_id: Option<String>,
}

impl RawFields {
    fn slot(&mut self, local_name: &[u8]) -> Option<&mut Option<String>> {
        match local_name {
            b"languageCode" => Some(&mut self.language_code),
            b"optionsQuota" => Some(&mut self.options_quota),
            b"SearchType" => Some(&mut self.search_type),
            b"StartDate" => Some(&mut self.start_date),
            b"EndDate" => Some(&mut self.end_date),
            b"Currency" => Some(&mut self.currency),
            b"Nationality" => Some(&mut self.nationality),
            _ => None,
        }
    }

    fn capture_parameter(&mut self, element: &BytesStart) -> Result<(), ValidationError> {
        if self.parameter.is_some() {
            return Ok(());
        }

        let mut parameter = RawParameter::default();
        for attr in element.attributes() {
            let attr = attr.map_err(|e| ValidationError::MalformedInput(e.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| ValidationError::MalformedInput(e.to_string()))?
                .trim()
                .to_string();
            match attr.key.local_name().as_ref() {
                b"username" => parameter.username = Some(value),
                b"password" => parameter.password = Some(value),
                b"CompanyID" => parameter.company_id = Some(value),
                _ => (),
            }
        }
        self.parameter = Some(parameter);
        Ok(())
    }
}

impl RawParameter {
    // (username, password, company id); empty values count as missing
    fn credentials(self) -> Result<(String, String, String), ValidationError> {
        match (
            non_empty(self.username),
            non_empty(self.password),
            non_empty(self.company_id),
        ) {
            (Some(username), Some(password), Some(company_id)) => {
                Ok((username, password, company_id))
            }
            _ => Err(ValidationError::MissingCredentials),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>, field: &str) -> Result<String, ValidationError> {
    non_empty(value).ok_or_else(|| ValidationError::missing_field(field))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::BadDateFormat {
        field: field.to_string(),
        value: value.to_string(),
    })
}

// Character data of a leaf field up to its matching end tag. Text, CDATA
// sections and entity references are joined; comments, processing
// instructions and anything inside child elements are skipped.
fn read_leaf_text(reader: &mut Reader<&[u8]>) -> Result<String, ValidationError> {
    let mut value = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Text(e) if depth == 0 => {
                value.push_str(&e.decode().map_err(quick_xml::Error::from)?);
            }
            Event::CData(e) if depth == 0 => {
                value.push_str(&e.decode().map_err(quick_xml::Error::from)?);
            }
            Event::GeneralRef(e) if depth == 0 => {
                if let Some(ch) = e.resolve_char_ref()? {
                    value.push(ch);
                    continue;
                }
                let name = e.decode().map_err(quick_xml::Error::from)?;
                let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                    ValidationError::MalformedInput(format!("unknown entity reference &{name};"))
                })?;
                value.push_str(resolved);
            }
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => break,
            Event::End(_) => depth -= 1,
            Event::Eof => {
                return Err(ValidationError::MalformedInput(
                    "field element is never closed".to_string(),
                ));
            }
            _ => (),
        }
    }

    Ok(value.trim().to_string())
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

// Walks the whole document once, keeping the first occurrence of every
// field regardless of nesting or namespace prefix. Only whitespace,
// comments and processing instructions may follow the root element.
fn read_fields(raw_xml: &str) -> Result<RawFields, ValidationError> {
    let mut fields = RawFields::default();
    let mut reader = Reader::from_str(raw_xml);

    let mut open_elements: Vec<String> = Vec::new();
    let mut seen_root = false;

    loop {
        let event = reader.read_event()?;

        if seen_root && open_elements.is_empty() {
            let trailing = match &event {
                Event::Start(_) | Event::Empty(_) | Event::CData(_) | Event::GeneralRef(_) => true,
                Event::Text(e) => !is_blank(e),
                _ => false,
            };
            if trailing {
                return Err(ValidationError::MalformedInput(
                    "content after the root element".to_string(),
                ));
            }
        }

        match event {
            Event::Start(e) => {
                seen_root = true;
                let local = e.local_name();
                if let Some(slot) = fields.slot(local.as_ref()) {
                    // consumes the matching end tag
                    let text = read_leaf_text(&mut reader)?;
                    if slot.is_none() {
                        *slot = Some(text);
                    }
                    continue;
                }
                if local.as_ref() == b"Parameter" {
                    fields.capture_parameter(&e)?;
                }
                open_elements.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::Empty(e) => {
                seen_root = true;
                let local = e.local_name();
                if let Some(slot) = fields.slot(local.as_ref()) {
                    if slot.is_none() {
                        *slot = Some(String::new());
                    }
                } else if local.as_ref() == b"Parameter" {
                    fields.capture_parameter(&e)?;
                }
            }
            Event::End(_) => {
                open_elements.pop();
            }
            Event::Eof => break,
            _ => (),
        }
    }

    if let Some(unclosed) = open_elements.last() {
        return Err(ValidationError::MalformedInput(format!(
            "element <{unclosed}> is never closed"
        )));
    }
    if !seen_root {
        return Err(ValidationError::MalformedInput(
            "document has no root element".to_string(),
        ));
    }

    Ok(fields)
}

pub struct XmlRequestParser {
    config: Arc<MarketConfig>,
    clock: Arc<dyn Clock>,
}

impl XmlRequestParser {
    pub fn new(config: Arc<MarketConfig>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Arc<MarketConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    // First failure wins: lead time, then stay length
    fn check_dates(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<(), ValidationError> {
        let rules = self.config.rules;
        let earliest_start = self.clock.today() + Duration::days(rules.min_lead_days);

        if start_date < earliest_start {
            tracing::error!(%start_date, %earliest_start, "StartDate inside the minimum lead time");
            return Err(ValidationError::LeadTimeTooShort {
                min_days: rules.min_lead_days,
            });
        }
        if (end_date - start_date).num_days() < rules.min_stay_nights {
            tracing::error!(%start_date, %end_date, "stay shorter than the minimum");
            return Err(ValidationError::StayTooShort {
                min_nights: rules.min_stay_nights,
            });
        }
        Ok(())
    }
}

impl RequestParser for XmlRequestParser {
    fn parse(&self, raw_xml: &str) -> Result<ExtractedRequest, ValidationError> {
        let fields = read_fields(raw_xml)?;
        tracing::debug!("XML data successfully parsed");

        let search_type = required(fields.search_type, "SearchType")?;
        let start_raw = required(fields.start_date, "StartDate")?;
        let end_raw = required(fields.end_date, "EndDate")?;

        let Some(parameter) = fields.parameter else {
            tracing::error!("missing Configuration->Parameters in XML");
            return Err(ValidationError::missing_field("Parameter"));
        };
        let (username, password, company_raw) = parameter.credentials().inspect_err(|_| {
            tracing::error!("missing required authentication parameters");
        })?;

        let start_date = parse_date("StartDate", &start_raw)?;
        let end_date = parse_date("EndDate", &end_raw)?;
        self.check_dates(start_date, end_date)?;

        let language_code = self.config.coerce_language(fields.language_code.as_deref());
        let currency = self.config.coerce_currency(fields.currency.as_deref());
        let nationality = self.config.coerce_nationality(fields.nationality.as_deref());

        let options_quota = match non_empty(fields.options_quota) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ValidationError::InvalidOptionsQuota { value: raw })?,
            None => self.config.rules.default_options_quota,
        };

        let company_id = company_raw
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidCompanyId { value: company_raw })?;

        let request = ExtractedRequest {
            language_code,
            options_quota,
            search_type,
            start_date,
            end_date,
            currency,
            nationality,
            password,
            username,
            company_id,
        };
        tracing::info!(
            language_code = %request.language_code,
            options_quota = request.options_quota,
            search_type = %request.search_type,
            start_date = %request.start_date,
            end_date = %request.end_date,
            nights = request.nights(),
            currency = %request.currency,
            nationality = %request.nationality,
            username = %request.username,
            company_id = request.company_id,
            "extracted availability request"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn parser() -> XmlRequestParser {
        XmlRequestParser::with_clock(
            Arc::new(MarketConfig::default()),
            Arc::new(FixedClock(today())),
        )
    }

    fn date_str(days_from_today: i64) -> String {
        (today() + Duration::days(days_from_today))
            .format(DATE_FORMAT)
            .to_string()
    }

    fn request_xml(start_offset: i64, nights: i64) -> String {
        format!(
            r#"<AvailRQ>
                <languageCode>es</languageCode>
                <optionsQuota>15</optionsQuota>
                <SearchType>Multiple</SearchType>
                <StartDate>{}</StartDate>
                <EndDate>{}</EndDate>
                <Currency>GBP</Currency>
                <Nationality>GB</Nationality>
                <Parameter password="secret" username="agent" CompanyID="123456"/>
            </AvailRQ>"#,
            date_str(start_offset),
            date_str(start_offset + nights)
        )
    }

    #[test]
    fn extracts_every_field() {
        let request = parser().parse(&request_xml(10, 4)).unwrap();

        assert_eq!(request.language_code, "es");
        assert_eq!(request.options_quota, 15);
        assert_eq!(request.search_type, "Multiple");
        assert_eq!(request.start_date, today() + Duration::days(10));
        assert_eq!(request.end_date, today() + Duration::days(14));
        assert_eq!(request.nights(), 4);
        assert_eq!(request.currency, "GBP");
        assert_eq!(request.nationality, "GB");
        assert_eq!(request.username, "agent");
        assert_eq!(request.password, "secret");
        assert_eq!(request.company_id, 123456);
    }

    #[test]
    fn debug_output_hides_password() {
        let request = parser().parse(&request_xml(10, 4)).unwrap();
        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("agent"));
    }

    #[test_case(1, 3 => Err(ValidationError::LeadTimeTooShort { min_days: 2 }); "start one day out")]
    #[test_case(0, 5 => Err(ValidationError::LeadTimeTooShort { min_days: 2 }); "start today")]
    #[test_case(-3, 5 => Err(ValidationError::LeadTimeTooShort { min_days: 2 }); "start in the past")]
    #[test_case(2, 3 => Ok(3); "start two days out with three nights")]
    #[test_case(5, 2 => Err(ValidationError::StayTooShort { min_nights: 3 }); "two nights")]
    #[test_case(5, 0 => Err(ValidationError::StayTooShort { min_nights: 3 }); "same day checkout")]
    #[test_case(5, -2 => Err(ValidationError::StayTooShort { min_nights: 3 }); "checkout before checkin")]
    #[test_case(1, 1 => Err(ValidationError::LeadTimeTooShort { min_days: 2 }); "lead time reported before stay")]
    fn date_rules(start_offset: i64, nights: i64) -> Result<i64, ValidationError> {
        parser()
            .parse(&request_xml(start_offset, nights))
            .map(|r| r.nights())
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let xml = format!(
            r#"<AvailRQ>
                <SearchType>Single</SearchType>
                <StartDate>{}</StartDate>
                <EndDate>{}</EndDate>
                <Parameter password="p" username="u" CompanyID="7"/>
            </AvailRQ>"#,
            date_str(3),
            date_str(7)
        );
        let request = parser().parse(&xml).unwrap();

        assert_eq!(request.language_code, "en");
        assert_eq!(request.options_quota, 20);
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.nationality, "US");
    }

    #[test]
    fn whitelist_fields_are_coerced_not_rejected() {
        let xml = request_xml(10, 4)
            .replace("<languageCode>es", "<languageCode>xx")
            .replace("<Currency>GBP", "<Currency>JPY")
            .replace("<Nationality>GB", "<Nationality>ZZ");
        let request = parser().parse(&xml).unwrap();

        assert_eq!(request.language_code, "en");
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.nationality, "US");
    }

    #[test]
    fn empty_whitelist_elements_use_defaults() {
        let xml = request_xml(10, 4)
            .replace("<Currency>GBP</Currency>", "<Currency/>")
            .replace("<Nationality>GB</Nationality>", "<Nationality>  </Nationality>");
        let request = parser().parse(&xml).unwrap();

        assert_eq!(request.currency, "EUR");
        assert_eq!(request.nationality, "US");
    }

    #[test_case("<SearchType>Multiple</SearchType>", "SearchType"; "search type absent")]
    #[test_case("<StartDate>", "StartDate"; "start date absent")]
    #[test_case("<EndDate>", "EndDate"; "end date absent")]
    fn missing_required_field(element_start: &str, field: &str) {
        let xml = request_xml(10, 4);
        let start = xml.find(element_start).unwrap();
        let close = format!("</{field}>");
        let end = xml[start..].find(&close).unwrap() + start + close.len();
        let stripped = format!("{}{}", &xml[..start], &xml[end..]);

        assert_eq!(
            parser().parse(&stripped),
            Err(ValidationError::missing_field(field))
        );
    }

    #[test]
    fn empty_search_type_is_missing() {
        let xml = request_xml(10, 4).replace("<SearchType>Multiple</SearchType>", "<SearchType/>");
        assert_eq!(
            parser().parse(&xml),
            Err(ValidationError::missing_field("SearchType"))
        );
    }

    #[test]
    fn missing_parameter_element() {
        let xml = request_xml(10, 4).replace(
            r#"<Parameter password="secret" username="agent" CompanyID="123456"/>"#,
            "",
        );
        assert_eq!(
            parser().parse(&xml),
            Err(ValidationError::missing_field("Parameter"))
        );
    }

    #[test_case(r#"username="agent" CompanyID="123456""#; "no password")]
    #[test_case(r#"password="secret" CompanyID="123456""#; "no username")]
    #[test_case(r#"password="secret" username="agent""#; "no company id")]
    #[test_case(r#"password="" username="agent" CompanyID="123456""#; "empty password")]
    #[test_case(""; "no attributes")]
    fn missing_credentials(attributes: &str) {
        let xml = request_xml(10, 4).replace(
            r#"password="secret" username="agent" CompanyID="123456""#,
            attributes,
        );
        assert_eq!(
            parser().parse(&xml),
            Err(ValidationError::MissingCredentials)
        );
    }

    #[test_case("<AvailRQ><SearchType>Multiple</AvailRQ>"; "unterminated leaf")]
    #[test_case("<AvailRQ><Currency>EUR</Currency>"; "unterminated root")]
    #[test_case("<AvailRQ><Currency>EUR</Currency></Other>"; "mismatched end tag")]
    #[test_case("<AvailRQ"; "unclosed start tag")]
    #[test_case(""; "empty body")]
    #[test_case("just some text"; "no root element")]
    #[test_case("<AvailRQ><Currency>EUR</Currency></AvailRQ><Other/>"; "second root element")]
    #[test_case("<AvailRQ><Currency>EUR</Currency></AvailRQ>garbage text"; "text after root")]
    #[test_case("<StartDate>11/06/2025</StartDate><EndDate/>"; "leaf root followed by element")]
    #[test_case("<AvailRQ><StartDate>&unknown;</StartDate></AvailRQ>"; "unknown entity in field")]
    fn malformed_documents(xml: &str) {
        assert!(matches!(
            parser().parse(xml),
            Err(ValidationError::MalformedInput(_))
        ));
    }

    #[test_case("<Other/>"; "empty element")]
    #[test_case("<Other>x</Other>"; "element with content")]
    #[test_case("garbage text"; "text")]
    #[test_case("<![CDATA[x]]>"; "cdata section")]
    #[test_case("&amp;"; "entity reference")]
    fn content_after_complete_request_is_malformed(trailing: &str) {
        let xml = format!("{}{trailing}", request_xml(10, 4));
        assert!(matches!(
            parser().parse(&xml),
            Err(ValidationError::MalformedInput(_))
        ));
    }

    #[test_case("\n  \t"; "whitespace")]
    #[test_case("<!-- end of request -->"; "comment")]
    #[test_case("<?audit id=\"1\"?>"; "processing instruction")]
    fn ignorable_content_after_root(trailing: &str) {
        let xml = format!("{}{trailing}", request_xml(10, 4));
        assert!(parser().parse(&xml).is_ok());
    }

    #[test_case("", "<!-- note -->"; "trailing comment")]
    #[test_case("<!-- note -->", ""; "leading comment")]
    #[test_case("<![CDATA[", "]]>"; "cdata section")]
    #[test_case("<?marker?>", ""; "processing instruction")]
    #[test_case("\n    ", "  \n"; "surrounding whitespace")]
    fn start_date_text_ignores_markup(before: &str, after: &str) {
        let start = date_str(10);
        let xml = request_xml(10, 4).replace(
            &format!("<StartDate>{start}</StartDate>"),
            &format!("<StartDate>{before}{start}{after}</StartDate>"),
        );
        let request = parser().parse(&xml).unwrap();

        assert_eq!(request.start_date, today() + Duration::days(10));
    }

    #[test]
    fn field_text_joins_cdata_and_references() {
        // 11/06/2025 spelled with a character reference and a split CDATA section
        let xml = request_xml(10, 4)
            .replace("<StartDate>11/", "<StartDate>&#x31;1/<![CDATA[")
            .replace("/2025</StartDate>", "]]>/2025</StartDate>")
            .replace("<SearchType>Multiple", "<SearchType>Multi&amp;ple");
        let request = parser().parse(&xml).unwrap();

        assert_eq!(request.start_date, today() + Duration::days(10));
        assert_eq!(request.search_type, "Multi&ple");
    }

    #[test]
    fn nested_markup_inside_field_is_skipped() {
        let xml = request_xml(10, 4).replace(
            "<Currency>GBP</Currency>",
            "<Currency><note>ignored</note>GBP</Currency>",
        );
        assert_eq!(parser().parse(&xml).unwrap().currency, "GBP");
    }

    #[test]
    fn bad_date_format() {
        let xml = request_xml(10, 4).replace(&date_str(10), "2025-06-11");
        assert_eq!(
            parser().parse(&xml),
            Err(ValidationError::BadDateFormat {
                field: "StartDate".to_string(),
                value: "2025-06-11".to_string(),
            })
        );
    }

    #[test]
    fn impossible_calendar_date_is_bad_format() {
        let xml = request_xml(10, 4).replace(&date_str(14), "31/02/2026");
        assert!(matches!(
            parser().parse(&xml),
            Err(ValidationError::BadDateFormat { ref field, .. }) if field == "EndDate"
        ));
    }

    #[test]
    fn non_numeric_company_id() {
        let xml = request_xml(10, 4).replace(r#"CompanyID="123456""#, r#"CompanyID="ACME""#);
        assert_eq!(
            parser().parse(&xml),
            Err(ValidationError::InvalidCompanyId {
                value: "ACME".to_string()
            })
        );
    }

    #[test]
    fn non_numeric_options_quota() {
        let xml = request_xml(10, 4).replace("<optionsQuota>15", "<optionsQuota>many");
        assert_eq!(
            parser().parse(&xml),
            Err(ValidationError::InvalidOptionsQuota {
                value: "many".to_string()
            })
        );
    }

    #[test]
    fn nested_and_namespaced_layout() {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <ns:AvailRQ xmlns:ns="http://example.com/avail">
                <ns:source><ns:languageCode>fr</ns:languageCode></ns:source>
                <ns:Configuration>
                    <ns:Parameters>
                        <ns:Parameter password="p&amp;w" username="agent" CompanyID=" 42 "></ns:Parameter>
                    </ns:Parameters>
                </ns:Configuration>
                <ns:SearchType>Multiple</ns:SearchType>
                <ns:StartDate>{}</ns:StartDate>
                <ns:EndDate>{}</ns:EndDate>
                <ns:Currency>USD</ns:Currency>
            </ns:AvailRQ>"#,
            date_str(4),
            date_str(8)
        );
        let request = parser().parse(&xml).unwrap();

        assert_eq!(request.language_code, "fr");
        assert_eq!(request.password, "p&w");
        assert_eq!(request.company_id, 42);
        assert_eq!(request.currency, "USD");
    }

    #[test]
    fn first_occurrence_wins() {
        let xml = request_xml(10, 4).replace(
            "</AvailRQ>",
            "<Currency>USD</Currency><Parameter password=\"x\" username=\"y\" CompanyID=\"1\"/></AvailRQ>",
        );
        let request = parser().parse(&xml).unwrap();

        assert_eq!(request.currency, "GBP");
        assert_eq!(request.company_id, 123456);
    }

    #[test]
    fn sample_request_file() {
        let xml = std::fs::read_to_string(SAMPLE_REQUEST_PATH).unwrap();
        let parser = XmlRequestParser::with_clock(
            Arc::new(MarketConfig::default()),
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())),
        );
        let request = parser.parse(&xml).unwrap();

        assert_eq!(request.search_type, "Multiple");
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2025, 6, 11).unwrap());
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(request.currency, "GBP");
        assert_eq!(request.nationality, "US");
        assert_eq!(request.company_id, 123456);
    }
}
