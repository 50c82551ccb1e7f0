//! SQL schema for the skinrank SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS skin_types (
    id    INTEGER PRIMARY KEY,
    title TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS skin_concerns (
    id    INTEGER PRIMARY KEY,
    title TEXT NOT NULL
);

-- Display name lives in `name`; older rows use `title` or `ingredient`.
CREATE TABLE IF NOT EXISTS ingredients (
    id          PRIMARY KEY,   -- untyped: integer or text ids
    name        TEXT,
    title       TEXT,
    ingredient  TEXT,
    description TEXT
);

-- The two effect tables share a shape and are never merged.
-- `effect` is 'HELPFUL' | 'AVOID'; anything else reads as HELPFUL.
CREATE TABLE IF NOT EXISTS skin_concern_ingredients (
    id              INTEGER PRIMARY KEY,
    skin_concern_id INTEGER NOT NULL REFERENCES skin_concerns(id),
    ingredient_id,
    effect          TEXT,
    note            TEXT
);

CREATE TABLE IF NOT EXISTS skin_type_ingredients (
    id            INTEGER PRIMARY KEY,
    skin_type_id  INTEGER NOT NULL REFERENCES skin_types(id),
    ingredient_id,
    effect        TEXT,
    note          TEXT
);

CREATE TABLE IF NOT EXISTS products (
    id    PRIMARY KEY,
    title TEXT NOT NULL,
    brand TEXT
);

CREATE TABLE IF NOT EXISTS product_ingredients (
    product_id    NOT NULL,
    ingredient_id NOT NULL,
    PRIMARY KEY (product_id, ingredient_id)
);

-- Reviews are scoped to one (product, skin type, concern) triple.
CREATE TABLE IF NOT EXISTS reviews (
    id                     INTEGER PRIMARY KEY,
    product_id             NOT NULL,
    skin_type_id           INTEGER NOT NULL REFERENCES skin_types(id),
    skin_concern_id        INTEGER NOT NULL REFERENCES skin_concerns(id),
    review_link            TEXT,
    review_text            TEXT,
    sentiment              TEXT,
    skin_type_reasoning    TEXT,
    skin_concern_reasoning TEXT
);

CREATE INDEX IF NOT EXISTS concern_ingredients_fk_idx   ON skin_concern_ingredients(skin_concern_id);
CREATE INDEX IF NOT EXISTS skin_type_ingredients_fk_idx ON skin_type_ingredients(skin_type_id);
CREATE INDEX IF NOT EXISTS product_ingredients_ing_idx  ON product_ingredients(ingredient_id);
CREATE INDEX IF NOT EXISTS reviews_scope_idx            ON reviews(skin_type_id, skin_concern_id, product_id);

PRAGMA user_version = 1;
";
