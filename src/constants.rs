use chrono_tz::Tz;

// Marketplace API endpoint
pub const DEFAULT_API_URL: &str =
    "https://api.mercadopublico.cl/servicios/v1/Publico/Licitaciones.json";

// Output artifacts consumed by the static dashboard
pub const OUTPUT_DATA_PATH: &str = "docs/data/tenders.json";
pub const OUTPUT_META_PATH: &str = "docs/data/meta.json";

// Environment variables
pub const ENV_TICKET: &str = "CHILECOMPRA_TICKET";
pub const ENV_API_URL: &str = "CHILECOMPRA_API_URL";
pub const ENV_START_DATE: &str = "CHILECOMPRA_START_DATE";
pub const ENV_END_DATE: &str = "CHILECOMPRA_END_DATE";

// Date-only inputs are interpreted in this timezone and all output
// timestamps are expressed in it.
pub const MARKETPLACE_TZ: Tz = chrono_tz::America::Santiago;

// Query parameter format for the daily listing endpoint (fecha=DDMMYYYY)
pub const DAY_PARAM_FORMAT: &str = "%d%m%Y";

// Patterns
pub const EPOCH_DATE_PATTERN: &str = r"^/Date\((\d+)([+-]\d{4})?\)/";
