//! Database error signature classifier

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters of the body kept as finding context
pub const ERROR_CONTEXT_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbmsSignature {
    MySql,
    Sqlite,
    PostgreSql,
    MsSql,
    Oracle,
    Generic,
}

impl DbmsSignature {
    pub fn tag(&self) -> &'static str {
        match self {
            DbmsSignature::MySql => "mysql",
            DbmsSignature::Sqlite => "sqlite",
            DbmsSignature::PostgreSql => "postgresql",
            DbmsSignature::MsSql => "mssql",
            DbmsSignature::Oracle => "oracle",
            DbmsSignature::Generic => "generic",
        }
    }
}

impl std::fmt::Display for DbmsSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbmsSignature::MySql => write!(f, "MySQL"),
            DbmsSignature::Sqlite => write!(f, "SQLite"),
            DbmsSignature::PostgreSql => write!(f, "PostgreSQL"),
            DbmsSignature::MsSql => write!(f, "Microsoft SQL Server"),
            DbmsSignature::Oracle => write!(f, "Oracle"),
            DbmsSignature::Generic => write!(f, "Generic SQL"),
        }
    }
}

const SIGNATURE_PATTERNS: &[(DbmsSignature, &str)] = &[
    (DbmsSignature::MySql, r"mysql_fetch|mysql_num|SQL syntax|SQL statement"),
    (DbmsSignature::Sqlite, r"sqlite|database disk image is malformed"),
    (DbmsSignature::PostgreSql, r"PostgreSQL|SQLSTATE|pg_query"),
    (DbmsSignature::MsSql, r"MSSQL|SQL Server|Msg \d+"),
    (DbmsSignature::Oracle, r"ORA-\d+|Oracle|PL/SQL"),
    (
        DbmsSignature::Generic,
        r"Syntax error|Unterminated string|Unexpected end of file|SQL error",
    ),
];

// Compiled once, in table order
static SIGNATURES: Lazy<Vec<(DbmsSignature, Regex)>> = Lazy::new(|| {
    SIGNATURE_PATTERNS
        .iter()
        .filter_map(|(db, pattern)| {
            Regex::new(&format!("(?i){}", pattern))
                .ok()
                .map(|re| (*db, re))
        })
        .collect()
});

/// First signature in table order that matches the body
pub fn detect_sql_error(body: &str) -> Option<DbmsSignature> {
    if body.is_empty() {
        return None;
    }

    let lower = body.to_lowercase();
    SIGNATURES
        .iter()
        .find(|(_, re)| re.is_match(&lower))
        .map(|(db, _)| *db)
}

/// Leading excerpt of an error page kept on the finding
pub fn error_context(body: &str) -> String {
    body.chars().take(ERROR_CONTEXT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_signature() {
        let body = "You have an error in your sql SYNTAX; check the manual";
        assert_eq!(detect_sql_error(body), Some(DbmsSignature::MySql));
    }

    #[test]
    fn test_postgres_signature() {
        let body = "Warning: query failed: ERROR: PostgreSQL said no";
        assert_eq!(detect_sql_error(body), Some(DbmsSignature::PostgreSql));
    }

    #[test]
    fn test_patterned_signatures() {
        assert_eq!(
            detect_sql_error("Msg 102, Level 15, State 1"),
            Some(DbmsSignature::MsSql)
        );
        assert_eq!(
            detect_sql_error("ORA-00933: SQL command not properly ended"),
            Some(DbmsSignature::Oracle)
        );
        assert_eq!(
            detect_sql_error("Unterminated string constant"),
            Some(DbmsSignature::Generic)
        );
    }

    #[test]
    fn test_first_category_wins() {
        // matches both mysql ("SQL syntax") and sqlite
        let body = "SQLite3::query(): near \"'\": SQL syntax error";
        assert_eq!(detect_sql_error(body), Some(DbmsSignature::MySql));

        // matches sqlite and postgresql; sqlite comes first
        let body = "sqlite driver wrapped a PostgreSQL error";
        assert_eq!(detect_sql_error(body), Some(DbmsSignature::Sqlite));
    }

    #[test]
    fn test_clean_and_empty_bodies() {
        assert_eq!(detect_sql_error(""), None);
        assert_eq!(detect_sql_error("<html><body>Welcome</body></html>"), None);
    }

    #[test]
    fn test_error_context_truncation() {
        let body = "x".repeat(500);
        assert_eq!(error_context(&body).len(), ERROR_CONTEXT_CHARS);
        assert_eq!(error_context("short"), "short");
    }

    #[test]
    fn test_all_signatures_compile() {
        assert_eq!(SIGNATURES.len(), SIGNATURE_PATTERNS.len());
    }
}
