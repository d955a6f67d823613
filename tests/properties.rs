//! Property table integration tests.
//!
//! End-to-end flows over the property stream codec: building tables, encoding
//! them into header bytes plus sibling chunks, decoding crafted and damaged
//! streams, and binding variable-length payloads through chunk resolution.

use msgscope::prelude::*;
use std::sync::Arc;

/// Helper building one raw 16 byte property record for crafted streams.
fn raw_record(type_code: u16, id: u16, slot: [u8; 8]) -> [u8; 16] {
    let mut record = [0u8; 16];
    record[0..2].copy_from_slice(&type_code.to_le_bytes());
    record[2..4].copy_from_slice(&id.to_le_bytes());
    record[4..8].copy_from_slice(&0x0006u32.to_le_bytes());
    record[8..16].copy_from_slice(&slot);
    record
}

/// Helper prepending the preamble of `kind` to crafted records.
fn raw_stream(kind: TableKind, records: &[[u8; 16]]) -> Vec<u8> {
    let mut stream = vec![0u8; kind.preamble_len()];
    for record in records {
        stream.extend_from_slice(record);
    }
    stream
}

/// Helper running a table through a full encode, decode, and resolve cycle.
fn round_trip(table: &PropertyTable) -> Result<PropertyTable> {
    let (header, chunks) = table.encode()?;
    let decoded = PropertyTable::parse(&header, table.kind(), &DecodeConfig::default())?;
    let siblings: Vec<ChunkRc> = chunks.into_iter().map(ChunkRc::new).collect();
    decoded.resolve_chunks(&siblings)?;
    Ok(decoded)
}

#[test]
fn test_message_fixed_and_variable_cycle() -> Result<()> {
    let mut table = PropertyTable::new(TableKind::TopLevel);
    table.counts_mut().next_recipient_id = 2;
    table.counts_mut().next_attachment_id = 1;
    table.counts_mut().recipient_count = 2;
    table.counts_mut().attachment_count = 1;

    let readable = PropertyFlags::READABLE | PropertyFlags::WRITEABLE;
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
    table.set(PropertyValue::binary(
        MapiProperty::RTF_COMPRESSED,
        readable,
        vec![0x01, 0x02, 0x03, 0x04],
    ));

    let decoded = round_trip(&table)?;
    assert!(!decoded.diagnostics().has_any());
    assert_eq!(decoded.len(), 5);
    assert_eq!(decoded.counts(), table.counts());

    let importance = decoded
        .get(&MapiProperty::IMPORTANCE)
        .and_then(PropertyValue::as_i32);
    assert_eq!(importance, Some(1));

    let has_attach = decoded
        .get(&MapiProperty::HAS_ATTACH)
        .and_then(PropertyValue::as_bool);
    assert_eq!(has_attach, Some(true));

    let submitted = decoded
        .get(&MapiProperty::CLIENT_SUBMIT_TIME)
        .and_then(PropertyValue::as_datetime)
        .expect("submit time should convert to a datetime");
    assert_eq!(submitted.to_rfc3339(), "2020-01-01T00:00:00+00:00");

    let subject = decoded
        .get(&MapiProperty::SUBJECT)
        .expect("subject should survive the cycle");
    assert_eq!(subject.as_text().as_deref(), Some("Quarterly numbers"));

    let rtf = decoded
        .get(&MapiProperty::RTF_COMPRESSED)
        .expect("compressed body should survive the cycle");
    assert_eq!(rtf.resolved_data(), Some([0x01, 0x02, 0x03, 0x04].as_slice()));

    Ok(())
}

#[test]
fn test_attachment_storage_entry_names() -> Result<()> {
    let readable = PropertyFlags::READABLE;
    let mut table = PropertyTable::new(TableKind::Storage);
    table.set(PropertyValue::binary(
        MapiProperty::ATTACH_DATA,
        readable,
        vec![0x25, 0x50, 0x44, 0x46],
    ));
    table.set(PropertyValue::unicode(
        MapiProperty::ATTACH_LONG_FILENAME,
        readable,
        "report.pdf",
    ));
    table.set(PropertyValue::unicode(
        MapiProperty::ATTACH_MIME_TAG,
        readable,
        "application/pdf",
    ));

    let (header, chunks) = table.encode()?;
    assert_eq!(header.len(), 8 + 3 * 16);

    // Chunks come out in ascending identifier order, named with the
    // canonical wide tag for strings and the raw tag otherwise.
    let names: Vec<String> = chunks.iter().map(Chunk::entry_name).collect();
    assert_eq!(
        names,
        vec![
            "__substg1.0_37010102".to_string(),
            "__substg1.0_3707001F".to_string(),
            "__substg1.0_370E001F".to_string(),
        ]
    );
    for name in &names {
        assert!(
            name.starts_with(VARIABLE_ENTRY_PREFIX),
            "entry name '{name}' should carry the sibling prefix"
        );
    }

    let decoded = PropertyTable::parse(&header, TableKind::Storage, &DecodeConfig::default())?;
    let siblings: Vec<ChunkRc> = chunks.into_iter().map(ChunkRc::new).collect();
    decoded.resolve_chunks(&siblings)?;

    let filename = decoded
        .get(&MapiProperty::ATTACH_LONG_FILENAME)
        .expect("filename should survive the cycle");
    assert_eq!(filename.as_text().as_deref(), Some("report.pdf"));

    let data = decoded
        .get(&MapiProperty::ATTACH_DATA)
        .expect("payload should survive the cycle");
    assert_eq!(data.resolved_data(), Some([0x25, 0x50, 0x44, 0x46].as_slice()));

    Ok(())
}

#[test]
fn test_narrow_payload_survives_byte_for_byte() -> Result<()> {
    let mut table = PropertyTable::new(TableKind::Storage);
    table.set(PropertyValue::string8(
        MapiProperty::SENDER_NAME,
        PropertyFlags::READABLE,
        "Jane Doe",
    ));

    let (header, chunks) = table.encode()?;

    // The record header and entry name are promoted to the wide tag while the
    // payload bytes stay narrow, so the declared length keeps the one byte
    // terminator allowance of the original narrow form.
    assert_eq!(&header[8..10], &[0x1F, 0x00]);
    assert_eq!(&header[10..12], &[0x1A, 0x0C]);
    assert_eq!(chunks[0].entry_name(), "__substg1.0_0C1A001F");
    assert_eq!(chunks[0].data(), b"Jane Doe");

    let decoded = PropertyTable::parse(&header, TableKind::Storage, &DecodeConfig::default())?;
    let siblings: Vec<ChunkRc> = chunks.into_iter().map(ChunkRc::new).collect();
    decoded.resolve_chunks(&siblings)?;

    let sender = decoded
        .get(&MapiProperty::SENDER_NAME)
        .expect("sender should survive the cycle");
    assert_eq!(sender.resolved_data(), Some(b"Jane Doe".as_slice()));

    let pointer = sender.pointer().expect("sender should stay variable-length");
    assert_eq!(pointer.mapi_type(), MapiType::UNICODE);
    assert_eq!(pointer.declared_size(), 9);

    Ok(())
}

#[test]
fn test_truncation_points_keep_prefix() -> Result<()> {
    let stream = raw_stream(
        TableKind::Storage,
        &[
            raw_record(0x0003, 0x0017, [0x02, 0, 0, 0, 0, 0, 0, 0]),
            raw_record(0x000B, 0x0E1B, [0x01, 0, 0, 0, 0, 0, 0, 0]),
            raw_record(0x0003, 0x3FDE, [0xE9, 0xFD, 0, 0, 0, 0, 0, 0]),
        ],
    );

    let cases = [
        (stream.len(), 3, false),
        (24, 1, false),
        (28, 1, true),
        (8, 0, false),
        (5, 0, true),
    ];

    for (length, expected_entries, expect_warning) in cases {
        let table =
            PropertyTable::parse(&stream[..length], TableKind::Storage, &DecodeConfig::default())?;
        assert_eq!(
            table.len(),
            expected_entries,
            "prefix of {length} bytes should keep {expected_entries} entries"
        );
        assert_eq!(
            table.diagnostics().has_warnings(),
            expect_warning,
            "prefix of {length} bytes"
        );
        assert!(!table.diagnostics().has_errors());
    }

    Ok(())
}

#[test]
fn test_unknown_type_mid_stream_keeps_decoded_prefix() -> Result<()> {
    let stream = raw_stream(
        TableKind::Storage,
        &[
            raw_record(0x0003, 0x0017, [0x02, 0, 0, 0, 0, 0, 0, 0]),
            raw_record(0x0042, 0x0100, [0, 0, 0, 0, 0, 0, 0, 0]),
            raw_record(0x0003, 0x3FDE, [0xE9, 0xFD, 0, 0, 0, 0, 0, 0]),
        ],
    );

    let table = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;

    // Decoding stops at the unrecognized code, keeping what came before it.
    assert_eq!(table.len(), 1);
    assert!(table.get_by_id(0x0017).is_some());
    assert!(table.get_by_id(0x3FDE).is_none());

    let warnings = table.diagnostics().warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("unrecognized wire type"));
    assert!(warnings[0].message.contains("0x0042"));

    Ok(())
}

#[test]
fn test_type_conflict_reports_structural_error() -> Result<()> {
    // Subject is usually a string, so a boolean declaration is structural
    // damage rather than an acceptable substitution.
    let stream = raw_stream(
        TableKind::Storage,
        &[raw_record(0x000B, 0x0037, [0x01, 0, 0, 0, 0, 0, 0, 0])],
    );

    let table = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;
    assert_eq!(table.len(), 0);
    assert!(table.diagnostics().has_errors());

    let structural = table.diagnostics().by_category(DiagnosticCategory::Properties);
    assert_eq!(structural.len(), 1);
    assert_eq!(structural[0].severity, DiagnosticSeverity::Error);
    assert!(structural[0].message.contains("conflicts with the usual type"));

    Ok(())
}

#[test]
fn test_open_typed_and_unknown_identities() -> Result<()> {
    let stream = raw_stream(
        TableKind::Storage,
        &[
            raw_record(0x0003, 0x3714, [0x04, 0, 0, 0, 0, 0, 0, 0]),
            raw_record(0x0003, 0x6789, [0x2A, 0, 0, 0, 0, 0, 0, 0]),
        ],
    );

    let table = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;
    assert_eq!(table.len(), 2);

    // An open-typed catalog entry takes whatever the stream declares, with a
    // note rather than a warning.
    let flags = table
        .get(&MapiProperty::ATTACH_FLAGS)
        .and_then(PropertyValue::as_i32);
    assert_eq!(flags, Some(4));
    assert_eq!(table.diagnostics().info_count(), 1);
    assert!(!table.diagnostics().has_warnings());

    // An identifier outside the catalog gets a minted identity carrying the
    // declared type.
    let custom = table
        .get_by_id(0x6789)
        .expect("uncatalogued identifier should still decode");
    assert_eq!(custom.property().name(), "Unknown 26505");
    assert_eq!(custom.property().usual_type(), MapiType::INT32);
    assert_eq!(custom.as_i32(), Some(42));

    Ok(())
}

#[test]
fn test_duplicate_record_resolves_to_last() -> Result<()> {
    let stream = raw_stream(
        TableKind::Storage,
        &[
            raw_record(0x0003, 0x0017, [0x01, 0, 0, 0, 0, 0, 0, 0]),
            raw_record(0x0003, 0x0017, [0x02, 0, 0, 0, 0, 0, 0, 0]),
        ],
    );

    let mut table = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;
    assert_eq!(table.len(), 1);
    let importance = table
        .get(&MapiProperty::IMPORTANCE)
        .and_then(PropertyValue::as_i32);
    assert_eq!(importance, Some(2));

    let warnings = table.diagnostics().warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("duplicate property"));

    // Overwriting through the API hands back the decoded value.
    let previous = table.set(PropertyValue::new(
        MapiProperty::IMPORTANCE,
        PropertyFlags::READABLE,
        PropertyData::Int32(0),
    ));
    assert_eq!(previous.as_ref().and_then(PropertyValue::as_i32), Some(2));

    Ok(())
}

#[test]
fn test_allocation_ceiling_blocks_decode() -> Result<()> {
    // A compressed body declaring a gigabyte before any payload exists.
    let stream = raw_stream(
        TableKind::Storage,
        &[raw_record(0x0102, 0x1009, [0, 0, 0, 0x40, 0, 0, 0, 0])],
    );

    let rejected = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default());
    match rejected {
        Err(Error::AllocationLimit { requested, limit }) => {
            assert_eq!(requested, 0x4000_0000);
            assert_eq!(limit, 1_000_000);
        }
        other => panic!("oversized declaration should be refused, got {other:?}"),
    }

    let loose = DecodeConfig::with_max_allocation(0x4000_0000);
    let table = PropertyTable::parse(&stream, TableKind::Storage, &loose)?;
    let body = table
        .get(&MapiProperty::RTF_COMPRESSED)
        .expect("declaration within the ceiling should decode");
    let pointer = body.pointer().expect("body should stay variable-length");
    assert_eq!(pointer.declared_size(), 0x4000_0000);

    Ok(())
}

#[test]
fn test_missing_sibling_then_late_resolution() -> Result<()> {
    let stream = raw_stream(
        TableKind::Storage,
        &[raw_record(0x001F, 0x39FE, [0x18, 0, 0, 0, 0, 0, 0, 0])],
    );

    let table = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;
    table.resolve_chunks(&[])?;

    // The value stays, unresolved, and the gap is reported once.
    let address = table
        .get(&MapiProperty::SMTP_ADDRESS)
        .expect("pointer property should survive without its payload");
    assert_eq!(address.resolved_data(), None);
    assert_eq!(address.as_text(), None);

    let warnings = table.diagnostics().warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("no sibling entry found"));

    // A later pass with the payload available completes the binding.
    let payload: Vec<u8> = "a@b.example".encode_utf16().flat_map(u16::to_le_bytes).collect();
    let sibling = ChunkRc::new(Chunk::new(0x39FE, MapiType::UNICODE, payload));
    table.resolve_chunks(&[sibling])?;

    let address = table
        .get(&MapiProperty::SMTP_ADDRESS)
        .expect("pointer property should still be present");
    assert_eq!(address.as_text().as_deref(), Some("a@b.example"));

    // Resolved pointers are skipped, so running the pass again changes nothing.
    table.resolve_chunks(&[])?;
    assert_eq!(table.diagnostics().warning_count(), 1);

    Ok(())
}

#[test]
fn test_shared_sink_accumulates_across_streams() -> Result<()> {
    let mut stream = raw_stream(
        TableKind::Storage,
        &[raw_record(0x0003, 0x0017, [0x02, 0, 0, 0, 0, 0, 0, 0])],
    );
    stream.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    let sink = Arc::new(Diagnostics::new());
    let config = DecodeConfig::default();
    PropertyTable::parse_with_diagnostics(&stream, TableKind::Storage, &config, Arc::clone(&sink))?;
    PropertyTable::parse_with_diagnostics(&stream, TableKind::Storage, &config, Arc::clone(&sink))?;

    assert_eq!(sink.warning_count(), 2);
    assert!(sink
        .summary()
        .starts_with("Diagnostics: 0 error(s), 2 warning(s)"));

    Ok(())
}

#[test]
fn test_multi_valued_payload_stays_opaque() -> Result<()> {
    let stream = raw_stream(
        TableKind::Storage,
        &[raw_record(0x101F, 0x8001, [0x08, 0, 0, 0, 0, 0, 0, 0])],
    );

    let table = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;
    let value = table
        .get_by_id(0x8001)
        .expect("multi-valued record should decode");
    let element_type = value
        .pointer()
        .expect("multi-valued value should stay variable-length")
        .mapi_type();
    assert!(element_type.is_multi_valued());

    let payload = vec![0x31, 0x00, 0x32, 0x00, 0x33, 0x00, 0x34, 0x00];
    let sibling = ChunkRc::new(Chunk::new(0x8001, element_type, payload.clone()));
    table.resolve_chunks(&[sibling])?;

    // The payload binds but is not split into elements at this layer.
    let value = table.get_by_id(0x8001).expect("property should still be present");
    assert_eq!(value.resolved_data(), None);
    assert_eq!(value.as_text(), None);

    let (_, chunks) = table.encode()?;
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].entry_name(), "__substg1.0_8001101F");
    assert_eq!(chunks[0].data(), payload.as_slice());
    assert_eq!(
        Chunk::parse_entry_name(&chunks[0].entry_name()),
        Some((0x8001, 0x101F))
    );

    Ok(())
}

#[test]
fn test_kind_mismatch_is_soft() -> Result<()> {
    let stream = raw_stream(
        TableKind::Storage,
        &[raw_record(0x0003, 0x0017, [0x02, 0, 0, 0, 0, 0, 0, 0])],
    );

    // Read with the right preamble the record is there.
    let storage = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;
    assert_eq!(storage.len(), 1);

    // Read with a larger preamble the stream is too short to hold one, which
    // is reported but never fatal.
    let top_level = PropertyTable::parse(&stream, TableKind::TopLevel, &DecodeConfig::default())?;
    assert_eq!(top_level.len(), 0);
    assert!(top_level.diagnostics().has_warnings());

    Ok(())
}
