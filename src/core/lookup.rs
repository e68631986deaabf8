//! Frozen lookup tables for string-typed code lists.
//!
//! Currency, country, unit, attachment MIME and reason codes are carried as
//! plain strings in the model and checked here when they are emitted. Every
//! table is sorted so lookups are a binary search.

use super::codes::CodeList;
use super::error::FacturXError;

/// Check whether `code` is part of `list`.
///
/// Lists backed by a closed enum (invoice type, tax category, ...) are not
/// tabulated here and always return `false`; use their `from_code` instead.
pub fn is_known(list: CodeList, code: &str) -> bool {
    table(list).is_some_and(|t| t.binary_search(&code).is_ok())
}

/// Like [`is_known`], but fails with [`FacturXError::UnknownCode`].
pub fn check_code(list: CodeList, code: &str) -> Result<(), FacturXError> {
    if is_known(list, code) {
        Ok(())
    } else {
        Err(FacturXError::unknown_code(list, code))
    }
}

fn table(list: CodeList) -> Option<&'static [&'static str]> {
    match list {
        CodeList::Currency => Some(CURRENCY_CODES),
        CodeList::Country => Some(COUNTRY_CODES),
        CodeList::Unit => Some(UNIT_CODES),
        CodeList::MimeCode => Some(MIME_CODES),
        CodeList::AllowanceReason => Some(ALLOWANCE_REASON_CODES),
        CodeList::ChargeReason => Some(CHARGE_REASON_CODES),
        CodeList::VatExemption => Some(VATEX_CODES),
        _ => None,
    }
}

/// ISO 4217 currency codes.
static CURRENCY_CODES: &[&str] = &[
    "AED", // UAE Dirham
    "AMD", // Armenian Dram
    "AUD", // Australian Dollar
    "BGN", // Bulgarian Lev
    "BRL", // Brazilian Real
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EGP", // Egyptian Pound
    "EUR", // Euro
    "GBP", // Pound Sterling
    "GEL", // Georgian Lari
    "HKD", // Hong Kong Dollar
    "HRK", // Croatian Kuna
    "HUF", // Hungarian Forint
    "IDR", // Indonesian Rupiah
    "ILS", // Israeli Shekel
    "INR", // Indian Rupee
    "ISK", // Icelandic Krona
    "JPY", // Japanese Yen
    "KES", // Kenyan Shilling
    "KRW", // South Korean Won
    "KZT", // Kazakhstani Tenge
    "MXN", // Mexican Peso
    "MYR", // Malaysian Ringgit
    "NGN", // Nigerian Naira
    "NOK", // Norwegian Krone
    "NZD", // New Zealand Dollar
    "PHP", // Philippine Peso
    "PLN", // Polish Zloty
    "RON", // Romanian Leu
    "RUB", // Russian Ruble
    "SAR", // Saudi Riyal
    "SEK", // Swedish Krona
    "SGD", // Singapore Dollar
    "THB", // Thai Baht
    "TRY", // Turkish Lira
    "TWD", // New Taiwan Dollar
    "UAH", // Ukrainian Hryvnia
    "USD", // US Dollar
    "VND", // Vietnamese Dong
    "ZAR", // South African Rand
];

/// ISO 3166-1 alpha-2 country codes.
static COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// UN/ECE Recommendation 20 and 21 unit codes common in European invoicing.
static UNIT_CODES: &[&str] = &[
    "2N",  // Decibel
    "4K",  // Kilovolt-ampere (reactive)
    "4L",  // Megabyte
    "5B",  // Batch
    "ANN", // Year
    "BAR", // Bar (pressure)
    "BLL", // Barrel (US)
    "BX",  // Box
    "C62", // One (piece/unit)
    "CCM", // Cubic centimetre
    "CLT", // Centilitre
    "CMK", // Square centimetre
    "CMQ", // Cubic centimetre
    "CMT", // Centimetre
    "CS",  // Case
    "CT",  // Carton
    "DAY", // Day
    "DLT", // Decilitre
    "DMK", // Square decimetre
    "DMQ", // Cubic decimetre (litre)
    "DMT", // Decimetre
    "DZN", // Dozen
    "E34", // Gigabyte
    "EA",  // Each
    "FOT", // Foot
    "GLL", // Gallon (US)
    "GM",  // Gram per square metre
    "GRM", // Gram
    "GRO", // Gross
    "GWH", // Gigawatt-hour
    "H87", // Piece
    "HAR", // Hectare
    "HGM", // Hectogram (100 g)
    "HLT", // Hectolitre
    "HUR", // Hour
    "INH", // Inch
    "JOU", // Joule
    "KGM", // Kilogram
    "KGS", // Kilogram per second
    "KHZ", // Kilohertz
    "KMH", // Kilometre per hour
    "KMT", // Kilometre
    "KT",  // Kit
    "KTM", // Kilometre
    "KVA", // Kilovolt-ampere
    "KVT", // Kilovolt
    "KWH", // Kilowatt-hour
    "KWT", // Kilowatt
    "LBR", // Pound
    "LE",  // Lite
    "LM",  // Linear metre
    "LPA", // Litre of pure alcohol
    "LS",  // Lump sum
    "LTR", // Litre
    "MAW", // Megawatt
    "MBR", // Millibar
    "MGM", // Milligram
    "MHZ", // Megahertz
    "MIN", // Minute
    "MLT", // Millilitre
    "MMK", // Square millimetre
    "MMT", // Millimetre
    "MON", // Month
    "MQH", // Cubic metre per hour
    "MTK", // Square metre
    "MTQ", // Cubic metre
    "MTR", // Metre
    "MTS", // Metre per second
    "MWH", // Megawatt-hour
    "NAR", // Number of articles
    "NPR", // Number of pairs
    "P1",  // Percent
    "PA",  // Packet
    "PK",  // Pack
    "PR",  // Pair
    "QAN", // Quarter (of a year)
    "QTI", // Quantity (imperial)
    "RO",  // Roll
    "SA",  // Sack
    "SEC", // Second
    "SET", // Set
    "SMI", // Mile (statute)
    "ST",  // Sheet
    "STN", // Short ton (US)
    "TNE", // Tonne (metric ton)
    "WEE", // Week
    "XAE", // Aerosol
    "XAM", // Ampoule
    "XAV", // Capsule
    "XBA", // Barrel
    "XBD", // Bundle
    "XBE", // Bundle
    "XBG", // Bag
    "XBJ", // Bucket
    "XBK", // Basket
    "XBL", // Bale
    "XBO", // Bottle
    "XBX", // Box
    "XCA", // Can
    "XCG", // Cage
    "XCM", // Card
    "XCR", // Crate
    "XCS", // Case
    "XCT", // Carton
    "XCU", // Cup
    "XCW", // Cage roll
    "XCY", // Cylinder
    "XEN", // Envelope
    "XJG", // Jug
    "XJR", // Jar
    "XNE", // Unpackaged/bulk
    "XNT", // Net
    "XPA", // Packet
    "XPB", // Pallet box
    "XPK", // Package
    "XPU", // Tray
    "XPX", // Pallet
    "XRK", // Rack
    "XRL", // Reel
    "XRO", // Roll
    "XSA", // Sack
    "XSK", // Skeleton case
    "XST", // Sheet
    "XSW", // Shrink wrapped
    "XSY", // Sleeve
    "XTU", // Tube
    "XTY", // Tank
    "XVP", // Vacuum packed
    "XWR", // Wrap
    "YRD", // Yard
];

/// MIME codes Factur-X accepts for attached supporting documents (BT-125).
static MIME_CODES: &[&str] = &[
    "application/pdf",
    "application/vnd.oasis.opendocument.spreadsheet",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "image/jpeg",
    "image/png",
    "text/csv",
];

/// UNTDID 5189 allowance reason codes.
static ALLOWANCE_REASON_CODES: &[&str] = &[
    "100", // Special agreement
    "102", // Fixed long term
    "103", // Temporary
    "104", // Standard
    "105", // Yearly turnover
    "41",  // Bonus for works ahead of schedule
    "42",  // Other bonus
    "60",  // Manufacturer's consumer discount
    "62",  // Due to military status
    "63",  // Due to work accident
    "64",  // Special agreement
    "65",  // Production error discount
    "66",  // New outlet discount
    "67",  // Sample discount
    "68",  // End-of-range discount
    "70",  // Incoterm discount
    "71",  // Point of sales threshold allowance
    "88",  // Material surcharge/deduction
    "95",  // Discount
];

/// UNTDID 7161 charge reason codes.
static CHARGE_REASON_CODES: &[&str] = &[
    "AA",  // Advertising
    "AAA", // Telecommunication
    "AAC", // Technical modification
    "AAD", // Job-order production
    "AAE", // Outlays
    "AAF", // Off-premises
    "ABK", // Miscellaneous
    "ABL", // Additional packaging
    "ADR", // Other services
    "ADT", // Pick-up
    "AEW", // Environmental protection service
    "FC",  // Freight service
    "FI",  // Financing
    "FL",  // Flat rate
    "LA",  // Labelling
    "PC",  // Packing
    "TS",  // Testing
];

/// CEF VATEX exemption reason codes (BT-121).
static VATEX_CODES: &[&str] = &[
    "VATEX-EU-132", "VATEX-EU-132-1A", "VATEX-EU-132-1B", "VATEX-EU-132-1C", "VATEX-EU-132-1D",
    "VATEX-EU-132-1E", "VATEX-EU-132-1F", "VATEX-EU-132-1FA", "VATEX-EU-132-1G", "VATEX-EU-132-1H",
    "VATEX-EU-132-1I", "VATEX-EU-132-1J", "VATEX-EU-132-1K", "VATEX-EU-132-1L", "VATEX-EU-132-1M",
    "VATEX-EU-132-1N", "VATEX-EU-132-1O", "VATEX-EU-132-1P", "VATEX-EU-132-1Q", "VATEX-EU-143",
    "VATEX-EU-143-1A", "VATEX-EU-143-1B", "VATEX-EU-143-1C", "VATEX-EU-143-1D", "VATEX-EU-143-1E",
    "VATEX-EU-143-1F", "VATEX-EU-143-1FA", "VATEX-EU-143-1G", "VATEX-EU-143-1H", "VATEX-EU-143-1I",
    "VATEX-EU-143-1J", "VATEX-EU-143-1K", "VATEX-EU-143-1L", "VATEX-EU-144", "VATEX-EU-146-1E",
    "VATEX-EU-148", "VATEX-EU-148-A", "VATEX-EU-148-B", "VATEX-EU-148-C", "VATEX-EU-148-D",
    "VATEX-EU-148-E", "VATEX-EU-148-F", "VATEX-EU-148-G", "VATEX-EU-151", "VATEX-EU-151-1A",
    "VATEX-EU-151-1AA", "VATEX-EU-151-1B", "VATEX-EU-151-1C", "VATEX-EU-151-1D", "VATEX-EU-151-1E",
    "VATEX-EU-159", "VATEX-EU-309", "VATEX-EU-79-C", "VATEX-EU-AE", "VATEX-EU-D", "VATEX-EU-F",
    "VATEX-EU-G", "VATEX-EU-I", "VATEX-EU-IC", "VATEX-EU-J", "VATEX-EU-O", "VATEX-FR-CNWVAT",
    "VATEX-FR-FRANCHISE",
];
