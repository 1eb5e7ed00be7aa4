//! # Arcanum
//!
//! A read-only esoteric knowledge API.
//!
//! Arcanum ships a hand-authored reference dataset (the 78-card tarot deck,
//! the Tree of Life, classical astrology and ceremonial rituals), loads it
//! into SQLite, and serves it as JSON over HTTP with the cross-references
//! between the systems resolved at query time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌──────────┐
//! │  Dataset    │──▶│   Loader    │──▶│  SQLite  │
//! │ (built-in)  │   │ validate+tx │   │  tables  │
//! └─────────────┘   └─────────────┘   └────┬─────┘
//!                                          │
//!                      ┌───────────────────┤
//!                      ▼                   ▼
//!                 ┌──────────┐       ┌──────────┐
//!                 │   CLI    │       │   HTTP   │
//!                 │(arcanum) │       │  (JSON)  │
//!                 └──────────┘       └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! arcanum init                  # create database and load the dataset
//! arcanum stats                 # show what's loaded
//! arcanum card 0                # print The Fool's correspondences
//! arcanum serve                 # start HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Entity rows and enumerations |
//! | [`dataset`] | Built-in reference data and its validation |
//! | [`seed`] | Loading the dataset into the store |
//! | [`cards`] | Tarot queries |
//! | [`qabalah`] | Sephiroth, Paths and the Tree |
//! | [`astrology`] | Planets, signs, elements and modalities |
//! | [`rituals`] | Ritual catalogue queries |
//! | [`correspond`] | Cross-system correspondence resolution |
//! | [`server`] | HTTP server, state and error mapping |
//! | [`routes`] | Per-domain HTTP handlers |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |
//! | [`stats`] | Store statistics for the CLI |

pub mod astrology;
pub mod cards;
pub mod config;
pub mod correspond;
pub mod dataset;
pub mod db;
pub mod error;
pub mod migrate;
pub mod models;
pub mod qabalah;
pub mod rituals;
pub mod routes;
pub mod seed;
pub mod server;
pub mod stats;
