//! # Frontend Specifications
//!
//! Payloads between the site and the backend. All bodies and query parameters use
//! camelCase keys, errors are `{ "error": string }`, malformed query strings included.
//!
//! ## Tables
//!
//! `GET /tables`
//! - List of `{ name, title, items }`, `items` is null in remote mode
//! - In remote mode only the tables named in `CATALOG_TABLES` are listed, none when it is unset
//!
//! ## Listing
//!
//! `GET /tables/:table/items?page=&perPage=&q=`
//! - `page` starts at 1, `perPage` defaults to `CATALOG_PAGE_SIZE` and is capped at 100
//! - `q` matches name or code, case-insensitive
//! - Response: `{ table, page, perPage, totalItems, totalPages, cards }`
//! - 400 when `page` or `perPage` is not a number
//!
//! Cards
//! - `{ kind: "single", id, name, code, imageUrl, variantNumber }`
//! - `{ kind: "group", slug, baseName, count, firstNumber, lastNumber, imageUrl }`
//! - Group cards link to `/conjunto?table=<table>&base=<slug>`, the slug is already URL encoded
//!
//! ## Product
//!
//! `GET /tables/:table/items/:id`
//! - `{ table, id, name, code, imageUrl, baseName, variantNumber, groupSlug, groupSize, whatsappUrl }`
//! - `groupSlug` only when the product has siblings, show a "see all sizes" link with it
//!
//! ## Conjunto
//!
//! `GET /conjunto?table=&base=`
//! - `{ table, baseName, displayName, members, firstNumber, lastNumber, whatsappUrl }`
//! - Members ordered by variant number, unnumbered first
//! - Show `displayName`, `baseName` echoes the request
//! - 400 when `table` or `base` is missing, 404 when the table or group does not exist
//! ## Flow
//!
//! - Home lists tables
//! - Table page shows cards, paginated
//! - Single card opens the product page, group card opens the conjunto page
//! - Product and conjunto pages render a WhatsApp button with `whatsappUrl`
//! - Codes like `-` or `S/C` are placeholders and come back as null
//! - Missing images come back as null, render the placeholder image
