//! Benchmarks for property stream coding.
//!
//! Tests decode and encode performance over crafted property streams:
//! - Decoding fixed-width record runs (small and large)
//! - Decoding preambles with message counters
//! - Encoding tables back into header bytes and sibling chunks
//! - Chunk resolution over variable-length pointers
//! - Identity lookup and sibling entry naming

extern crate msgscope;

use criterion::{criterion_group, criterion_main, Criterion};
use msgscope::mapi::chunk::{Chunk, ChunkRc};
use msgscope::mapi::properties::{DecodeConfig, PropertyTable, TableKind};
use msgscope::mapi::property::MapiProperty;
use msgscope::mapi::types::MapiType;
use msgscope::mapi::value::{PropertyData, PropertyFlags, PropertyValue};
use std::hint::black_box;

/// Builds a stream of fixed-width integer records with custom identifiers.
///
/// Identifiers start at 0x8000 so every record also exercises the minting
/// path for uncatalogued properties.
fn synth_fixed_stream(count: usize) -> Vec<u8> {
    let mut stream = vec![0u8; 8];
    for index in 0..count {
        let id = 0x8000u16 + index as u16;
        stream.extend_from_slice(&0x0003u16.to_le_bytes());
        stream.extend_from_slice(&id.to_le_bytes());
        stream.extend_from_slice(&0x0006u32.to_le_bytes());
        stream.extend_from_slice(&(index as u32).to_le_bytes());
        stream.extend_from_slice(&[0u8; 4]);
    }
    stream
}

/// Builds a stream of variable-length pointer records plus matching siblings.
fn synth_pointer_stream(count: usize) -> (Vec<u8>, Vec<ChunkRc>) {
    let mut stream = vec![0u8; 8];
    let mut siblings = Vec::with_capacity(count);
    for index in 0..count {
        let id = 0x8000u16 + index as u16;
        stream.extend_from_slice(&0x0102u16.to_le_bytes());
        stream.extend_from_slice(&id.to_le_bytes());
        stream.extend_from_slice(&0x0006u32.to_le_bytes());
        stream.extend_from_slice(&32u32.to_le_bytes());
        stream.extend_from_slice(&[0u8; 4]);
        siblings.push(ChunkRc::new(Chunk::new(
            u32::from(id),
            MapiType::BINARY,
            vec![index as u8; 32],
        )));
    }
    (stream, siblings)
}

/// Builds a message-like table with fixed values and attached payloads.
fn synth_message_table() -> PropertyTable {
    let readable = PropertyFlags::READABLE | PropertyFlags::WRITEABLE;
    let mut table = PropertyTable::new(TableKind::TopLevel);
    table.counts_mut().recipient_count = 2;
    table.counts_mut().attachment_count = 1;
    table.set(PropertyValue::new(
        MapiProperty::IMPORTANCE,
        readable,
        PropertyData::Int32(1),
    ));
    table.set(PropertyValue::new(
        MapiProperty::HAS_ATTACH,
        readable,
        PropertyData::Boolean(true),
    ));
    table.set(PropertyValue::new(
        MapiProperty::CLIENT_SUBMIT_TIME,
        readable,
        PropertyData::Time(132_223_104_000_000_000),
    ));
    table.set(PropertyValue::unicode(
        MapiProperty::SUBJECT,
        readable,
        "Quarterly numbers",
    ));
    table.set(PropertyValue::unicode(
        MapiProperty::SMTP_ADDRESS,
        readable,
        "a@b.example",
    ));
    table.set(PropertyValue::binary(
        MapiProperty::RTF_COMPRESSED,
        readable,
        vec![0x5A; 256],
    ));
    table
}

/// Benchmark decoding a short run of fixed-width records.
/// Stream: 4 integer records behind a storage preamble
fn bench_decode_small(c: &mut Criterion) {
    let stream = synth_fixed_stream(4);
    let config = DecodeConfig::default();

    c.bench_function("props_decode_small", |b| {
        b.iter(|| {
            let table =
                PropertyTable::parse(black_box(&stream), TableKind::Storage, &config).unwrap();
            black_box(table)
        });
    });
}

/// Benchmark decoding a long run of fixed-width records.
/// Stream: 256 integer records behind a storage preamble
fn bench_decode_large(c: &mut Criterion) {
    let stream = synth_fixed_stream(256);
    let config = DecodeConfig::default();

    c.bench_function("props_decode_large", |b| {
        b.iter(|| {
            let table =
                PropertyTable::parse(black_box(&stream), TableKind::Storage, &config).unwrap();
            black_box(table)
        });
    });
}

/// Benchmark decoding a top level stream with message counters.
/// Stream: 32 byte preamble followed by 4 integer records
fn bench_decode_top_level(c: &mut Criterion) {
    let body = synth_fixed_stream(4);
    let mut stream = vec![0u8; 32];
    stream[8..12].copy_from_slice(&3u32.to_le_bytes());
    stream[12..16].copy_from_slice(&2u32.to_le_bytes());
    stream[16..20].copy_from_slice(&3u32.to_le_bytes());
    stream[20..24].copy_from_slice(&2u32.to_le_bytes());
    stream.extend_from_slice(&body[8..]);
    let config = DecodeConfig::default();

    c.bench_function("props_decode_top_level", |b| {
        b.iter(|| {
            let table =
                PropertyTable::parse(black_box(&stream), TableKind::TopLevel, &config).unwrap();
            black_box(table)
        });
    });
}

/// Benchmark encoding a table of fixed-width values only.
/// Table: 256 integer values, no sibling chunks
fn bench_encode_fixed(c: &mut Criterion) {
    let stream = synth_fixed_stream(256);
    let config = DecodeConfig::default();
    let table = PropertyTable::parse(&stream, TableKind::Storage, &config).unwrap();

    c.bench_function("props_encode_fixed", |b| {
        b.iter(|| {
            let encoded = black_box(&table).encode().unwrap();
            black_box(encoded)
        });
    });
}

/// Benchmark encoding a message-like table with attached payloads.
/// Table: 6 values, 3 of them emitting sibling chunks
fn bench_encode_message(c: &mut Criterion) {
    let table = synth_message_table();

    c.bench_function("props_encode_message", |b| {
        b.iter(|| {
            let encoded = black_box(&table).encode().unwrap();
            black_box(encoded)
        });
    });
}

/// Benchmark decoding plus binding pointers to their sibling chunks.
/// Stream: 64 binary pointers with a 64 entry sibling set
fn bench_decode_resolve(c: &mut Criterion) {
    let (stream, siblings) = synth_pointer_stream(64);
    let config = DecodeConfig::default();

    c.bench_function("props_decode_resolve", |b| {
        b.iter(|| {
            let table =
                PropertyTable::parse(black_box(&stream), TableKind::Storage, &config).unwrap();
            table.resolve_chunks(black_box(&siblings)).unwrap();
            black_box(table)
        });
    });
}

/// Benchmark a full encode, decode, and resolve cycle of a message table.
fn bench_round_trip(c: &mut Criterion) {
    let table = synth_message_table();
    let config = DecodeConfig::default();

    c.bench_function("props_round_trip", |b| {
        b.iter(|| {
            let (header, chunks) = black_box(&table).encode().unwrap();
            let decoded = PropertyTable::parse(&header, TableKind::TopLevel, &config).unwrap();
            let siblings: Vec<ChunkRc> = chunks.into_iter().map(ChunkRc::new).collect();
            decoded.resolve_chunks(&siblings).unwrap();
            black_box(decoded)
        });
    });
}

/// Benchmark looking up a catalogued identity by identifier.
fn bench_catalog_lookup(c: &mut Criterion) {
    c.bench_function("props_catalog_lookup", |b| {
        b.iter(|| {
            let property = MapiProperty::get(black_box(0x0037));
            black_box(property)
        });
    });
}

/// Benchmark formatting a sibling entry name.
/// Name: `__substg1.0_37010102`
fn bench_entry_name_format(c: &mut Criterion) {
    let chunk = Chunk::new(0x3701, MapiType::BINARY, vec![0u8; 16]);

    c.bench_function("props_entry_name_format", |b| {
        b.iter(|| {
            let name = black_box(&chunk).entry_name();
            black_box(name)
        });
    });
}

/// Benchmark parsing a sibling entry name back into identifier and type code.
fn bench_entry_name_parse(c: &mut Criterion) {
    let name = "__substg1.0_37010102";

    c.bench_function("props_entry_name_parse", |b| {
        b.iter(|| {
            let parsed = Chunk::parse_entry_name(black_box(name)).unwrap();
            black_box(parsed)
        });
    });
}

criterion_group!(
    benches,
    // Stream decoding
    bench_decode_small,
    bench_decode_large,
    bench_decode_top_level,
    // Stream encoding
    bench_encode_fixed,
    bench_encode_message,
    // Chunk resolution
    bench_decode_resolve,
    // Full cycles
    bench_round_trip,
    // Identity and naming
    bench_catalog_lookup,
    bench_entry_name_format,
    bench_entry_name_parse,
);
criterion_main!(benches);
