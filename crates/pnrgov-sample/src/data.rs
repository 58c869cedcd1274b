//! # Candidate Data Pools
//!
//! Fixed value pools the generator draws from. Names and airports skew
//! toward the North Atlantic network the original reporting system served.

/// Given names, pre-uppercased for direct use in message fields.
pub const FIRST_NAMES: &[&str] = &[
    "JOHN", "JANE", "MICHAEL", "SARAH", "DAVID", "EMILY", "ROBERT", "LISA",
    "WILLIAM", "JENNIFER", "JAMES", "MARIA", "THOMAS", "ANNA", "DANIEL", "EMMA",
    "KRISTJAN", "GUDRUN", "SIGURDUR", "HELGA", "OLAFUR", "BJORK", "MAGNUS", "HANNA",
    "SVEN", "INGRID", "LARS", "ASTRID", "ANDERS", "SOFIA", "HENRIK", "ELSA",
];

/// Surnames, pre-uppercased.
pub const LAST_NAMES: &[&str] = &[
    "SMITH", "JOHNSON", "WILLIAMS", "BROWN", "JONES", "GARCIA", "MILLER", "DAVIS",
    "RODRIGUEZ", "MARTINEZ", "HERNANDEZ", "LOPEZ", "GONZALEZ", "WILSON", "ANDERSON", "TAYLOR",
    "JONSSON", "KARLSSON", "NIELSEN", "HANSEN", "OLSEN", "PETERSEN", "LARSEN", "ERIKSSON",
    "MAGNUSSON", "STEFANSSON", "GUNNARSSON", "JOHANNSSON", "SIGURDSSON", "BJORNSSON",
];

/// Salutations. Index 0 is reserved for male passengers.
pub const TITLES: &[&str] = &["MR", "MRS", "MS", "MISS", "DR"];

/// Two-character airline designators.
pub const AIRLINES: &[&str] = &[
    "FI", "W6", "SK", "OG", "W4", "BA", "LH", "AF", "KL", "DL",
    "AA", "UA", "EK", "QF", "SQ", "AY", "IB", "LX", "OS", "SN",
];

/// Airport IATA codes.
pub const AIRPORTS: &[&str] = &[
    "KEF", "CPH", "ARN", "OSL", "HEL", "RIX", "TLL", "VNO", "WAW", "PRG", "BUD",
    "LHR", "LGW", "STN", "MAN", "EDI", "GLA", "DUB", "CRK", "SNN",
    "CDG", "ORY", "LYS", "NCE", "MPL",
    "AMS", "RTM", "EIN", "BRU", "BLL", "ZRH", "VIE", "LIS", "OPO",
    "FRA", "DHM", "MUC", "BER", "COL", "DUS", "HAM", "GBF", "BRE",
    "MAD", "SVQ", "AGP", "VLC", "IBZ", "PMI", "ALC", "BCN",
    "MXP", "MIL", "VCE", "BOL", "FCO", "CIA", "NAP", "PMO", "TRN",
    "ATH", "IST", "BEG",
    "JFK", "LGA", "EWR", "BOS", "PHL", "WAS", "IAD", "BNA", "ATL", "TPA", "MIA", "FLL", "MCO",
    "ORD", "MDW", "DTW", "CLE", "IND", "MSY", "MEM", "AUS", "SAT", "HOU", "IAH", "DFW", "DAL",
    "DEN", "PHX", "LAS", "SLC", "SFO", "SJC", "OAK", "LAX", "LGB", "ONT", "PDX",
    "YYZ", "YUL", "YVR", "YEG", "YWG", "YYJ",
    "MEX", "CUN", "PVR", "CZM", "XEL",
    "GIG", "SDU", "GRU", "VCP", "EZE", "AEP", "SCL", "MVD", "LIM", "BOG", "MDE", "CTG", "CCS",
];

/// Country codes for nationalities and document issuance.
pub const COUNTRIES: &[&str] = &[
    "IS", "US", "GB", "DE", "FR", "ES", "IT", "CA", "SE", "NO",
    "DK", "FI", "NL", "BE", "CH", "AT", "PL", "LT", "LV", "EE",
    "BR", "AR", "CL", "PE", "CO", "VE", "UY", "PY", "BO", "EC", "MX",
];

/// Cities of residence.
pub const CITIES: &[&str] = &[
    "REYKJAVIK", "COPENHAGEN", "LONDON", "PARIS", "FRANKFURT", "AMSTERDAM",
    "BRUSSELS", "ZURICH", "STOCKHOLM", "OSLO", "VILNIUS", "ROME", "MADRID",
    "NEW YORK", "LOS ANGELES", "CHICAGO", "BOSTON", "TORONTO", "MONTREAL",
];

/// Card scheme codes.
pub const CARD_TYPES: &[&str] = &["VI", "CA", "AX", "DC", "MC"];

/// E-mail domains for generated contacts.
pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "hotmail.com", "yahoo.com", "outlook.com", "icloud.com",
    "example.com", "mail.com", "protonmail.com",
];

/// International dialing prefixes.
pub const PHONE_COUNTRY_CODES: &[&str] = &[
    "354", "45", "46", "47", "44", "33", "49", "31", "32",
    "41", "1", "370", "372", "371", "358",
];

/// Street names for generated addresses.
pub const STREET_NAMES: &[&str] = &[
    "MAIN STREET", "HIGH STREET", "CHURCH ROAD", "STATION ROAD", "PARK AVENUE",
    "MARKET STREET", "SAEBRAUT", "LAUGAVEGUR", "SKOLAVORDUSTIGUR",
];

/// US state codes, used when the residence country is `US`.
pub const US_STATES: &[&str] = &["CA", "NY", "FL", "TX", "IL", "WA"];
