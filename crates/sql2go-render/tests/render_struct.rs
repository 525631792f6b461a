use sql2go_core::{config::GormTag, table_from_sql, Config, Table};
use sql2go_render::{render, Serializer};

use pretty_assertions::assert_eq;

fn generate(sql: &str, config: &Config) -> String {
    let table = table_from_sql(sql, config).unwrap();
    render(&table, config)
}

const USER_PROFILE: &str = "CREATE TABLE user_profile (
    user_id BIGINT,
    nick_name VARCHAR(32) COMMENT 'display name',
    created_at DATETIME
)";

#[test]
fn json_tags_aligned() {
    let config = Config::new().tag_json(true);

    assert_eq!(
        generate(
            "CREATE TABLE users (id INT UNSIGNED PRIMARY KEY, name VARCHAR(20) COMMENT 'user name')",
            &config,
        ),
        r#"type Users struct {
    Id   uint32 `json:"id"`
    Name string `json:"name"` // user name
}
"#
    );
}

#[test]
fn no_tags_drops_tag_field() {
    assert_eq!(
        generate(USER_PROFILE, &Config::new()),
        "type UserProfile struct {
    UserId    int64
    NickName  string    // display name
    CreatedAt time.Time
}
"
    );
}

#[test]
fn ignore_comment() {
    assert_eq!(
        generate(USER_PROFILE, &Config::new().ignore_comment(true)),
        "type UserProfile struct {
    UserId    int64
    NickName  string
    CreatedAt time.Time
}
"
    );
}

#[test]
fn lower_names() {
    let config = Config::new().table_lower(true).column_lower(true);

    assert_eq!(
        generate(USER_PROFILE, &config),
        "type user_profile struct {
    user_id    int64
    nick_name  string    // display name
    created_at time.Time
}
"
    );
}

#[test]
fn gorm_and_json_tags() {
    let config = Config::new()
        .bool_type(true)
        .tag_json(true)
        .tag_gorm(GormTag::all());

    let sql = "CREATE TABLE posts (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
        title VARCHAR(128) NOT NULL COMMENT 'headline',
        published TINYINT(1) NOT NULL DEFAULT 0,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        PRIMARY KEY (id)
    )";

    assert_eq!(
        generate(sql, &config),
        r#"type Posts struct {
    Id        uint64    `json:"id" gorm:"column:id;primaryKey"`
    Title     string    `json:"title" gorm:"column:title"`                                // headline
    Published bool      `json:"published" gorm:"column:published"`
    CreatedAt time.Time `json:"created_at" gorm:"column:created_at;default:current_time"`
}
"#
    );
}

#[test]
fn byte_columns_and_quoted_comment() {
    let config = Config::new().tag_db(true);

    let sql = "CREATE TABLE mixed (
        id INT UNSIGNED COMMENT '''quoted''',
        payload BLOB,
        flags BIT(8)
    )";

    assert_eq!(
        generate(sql, &config),
        r#"type Mixed struct {
    Id      uint32  `db:"id"`      // quoted
    Payload []byte  `db:"payload"`
    Flags   []uint8 `db:"flags"`
}
"#
    );
}

#[test]
fn widths_count_characters() {
    let config = Config::new().column_lower(true).tag_json(true);

    let sql = "CREATE TABLE Items (id INT, `名前` VARCHAR(10) COMMENT '品名')";

    assert_eq!(
        generate(sql, &config),
        r#"type Items struct {
    id int32  `json:"id"`
    名前 string `json:"名前"` // 品名
}
"#
    );
}

#[test]
fn table_without_columns() {
    let table = Table {
        name: "empty".into(),
        go_name: "Empty".into(),
        comment: String::new(),
        columns: vec![],
    };

    assert_eq!(render(&table, &Config::new()), "type Empty struct {\n}\n");
}

#[test]
fn serializer_reads_comment_setting_from_config() {
    let table = table_from_sql(USER_PROFILE, &Config::new()).unwrap();

    let with_comments = Serializer::new(&Config::new()).serialize(&table);
    assert!(with_comments.contains("// "), "{with_comments}");

    let config = Config::new().ignore_comment(true);
    let out = Serializer::new(&config).serialize(&table);
    assert!(!out.contains("//"), "{out}");
    assert_eq!(out, render(&table, &config));
}

#[test]
fn no_trailing_whitespace() {
    let config = Config::new().tag_json(true).tag_db(true);
    let out = generate(USER_PROFILE, &config);

    for line in out.lines() {
        assert_eq!(line, line.trim_end(), "line {line:?}");
    }
    assert!(out.ends_with("}\n"));
    assert!(!out.ends_with("\n\n"));
}
