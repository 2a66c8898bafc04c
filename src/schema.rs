//! Schema objects the seed binary provisions.
//!
//! Every statement is guarded with `IF NOT EXISTS`. Order matters: tables come
//! before the foreign keys and indexes that reference them.

pub const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE CHECK (char_length(username) BETWEEN 3 AND 30),
    full_name VARCHAR(100),
    password_hash TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT 'worker' CHECK (role IN ('worker', 'admin')),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

pub const CREATE_ITEMS: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id BIGSERIAL PRIMARY KEY,
    uuid_token TEXT NOT NULL UNIQUE,
    item_type TEXT NOT NULL,
    vendor TEXT,
    lot_number TEXT,
    date_of_supply TIMESTAMPTZ,
    manufacture_date TIMESTAMPTZ,
    warranty_months INTEGER CHECK (warranty_months >= 0),
    warranty_start_date TIMESTAMPTZ,
    warranty_end_date TIMESTAMPTZ,
    geo_lat DOUBLE PRECISION CHECK (geo_lat BETWEEN -90 AND 90),
    geo_lng DOUBLE PRECISION CHECK (geo_lng BETWEEN -180 AND 180),
    location TEXT,
    geotag TEXT,
    qr_access_password TEXT,
    dynamic_data JSONB NOT NULL DEFAULT '{}'::jsonb,
    created_by BIGINT NOT NULL REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

pub const CREATE_QR_SCAN_LOGS: &str = r#"
CREATE TABLE IF NOT EXISTS qr_scan_logs (
    id BIGSERIAL PRIMARY KEY,
    item_id BIGINT NOT NULL REFERENCES items(id),
    scanned_by BIGINT NOT NULL REFERENCES users(id),
    location TEXT,
    scanned_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

pub const INDEXES: [&str; 4] = [
    "CREATE INDEX IF NOT EXISTS idx_items_created_by ON items (created_by)",
    "CREATE INDEX IF NOT EXISTS idx_qr_scan_logs_item_id ON qr_scan_logs (item_id)",
    "CREATE INDEX IF NOT EXISTS idx_qr_scan_logs_scanned_by ON qr_scan_logs (scanned_by)",
    "CREATE INDEX IF NOT EXISTS idx_qr_scan_logs_scanned_at ON qr_scan_logs (scanned_at)",
];

/// All DDL in execution order.
pub fn statements() -> impl Iterator<Item = &'static str> {
    [CREATE_USERS, CREATE_ITEMS, CREATE_QR_SCAN_LOGS]
        .into_iter()
        .chain(INDEXES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_statement_is_idempotent() {
        for stmt in statements() {
            assert!(stmt.contains("IF NOT EXISTS"), "not guarded: {stmt}");
        }
    }

    #[test]
    fn tables_precede_dependents() {
        let all: Vec<&str> = statements().collect();
        let pos = |needle: &str| all.iter().position(|s| s.contains(needle)).unwrap();
        let users = pos("TABLE IF NOT EXISTS users");
        let items = pos("TABLE IF NOT EXISTS items");
        let logs = pos("TABLE IF NOT EXISTS qr_scan_logs");
        assert!(users < items && items < logs);
        assert!(all[3..].iter().all(|s| s.starts_with("CREATE INDEX")));
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn users_table_enforces_unique_username_and_roles() {
        assert!(CREATE_USERS.contains("username TEXT NOT NULL UNIQUE"));
        assert!(CREATE_USERS.contains("role IN ('worker', 'admin')"));
    }
}
