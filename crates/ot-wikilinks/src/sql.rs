//! MySQL statements for the link tables.

/// Statements run before any rows: charset, then fresh tables.
pub const PREAMBLE: &[&str] = &[
    "SET NAMES utf8;",
    "DROP TABLE IF EXISTS wikipedia_pages;",
    "CREATE TABLE `wikipedia_pages` ( \
     `page_id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY , \
     `title` VARCHAR( 100 ) NOT NULL \
     ) ENGINE = MYISAM;",
    "DROP TABLE IF EXISTS wikipedia_links;",
    "CREATE TABLE `wikipedia_links` ( \
     `link_id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY , \
     `page_id` INT NOT NULL , \
     `link` VARCHAR( 100 ) NOT NULL \
     ) ENGINE = MYISAM;",
];

/// Index statements run after all rows are loaded.
pub const EPILOGUE: &[&str] = &[
    "ALTER TABLE `wikipedia_pages` ADD INDEX ( `page_id` );",
    "ALTER TABLE `wikipedia_pages` ADD INDEX ( `title` );",
    "ALTER TABLE `wikipedia_links` ADD INDEX ( `page_id` );",
];

/// Quote-safe string literal content: `'` doubled, backslashes dropped.
pub fn escape_sql(value: &str) -> String {
    value.replace('\'', "''").replace('\\', "")
}

/// Row for one page title.
pub fn page_insert(page_id: u64, title: &str) -> String {
    format!(
        "INSERT INTO wikipedia_pages VALUES ({page_id}, '{}');",
        escape_sql(title)
    )
}

/// Row for one link of `page_id`.
pub fn link_insert(page_id: u64, link: &str) -> String {
    format!(
        "INSERT INTO wikipedia_links (page_id, link) VALUES ({page_id}, '{}');",
        escape_sql(link)
    )
}
