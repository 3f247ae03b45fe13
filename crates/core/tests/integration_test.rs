//! Integration tests for the file contract and the comparison runner.
//!
//! These tests go through real files: source -> archive -> restored file,
//! with verification that the restored file matches the source.

use archiver_core::{
    codec::{self, Codec},
    compare,
    error::{CorruptArchive, Error},
    header::HEADER_LEN,
    Huffman, Lz78, Rle,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Fresh directory under the system temp dir, unique per test.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("archiver-core-{}-{}", std::process::id(), test));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

fn write(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).expect("failed to write source file");
    path
}

fn seeded_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

/// Test the full Huffman file round trip and its naming.
#[test]
fn test_huffman_file_round_trip() {
    let dir = scratch_dir("huffman-round-trip");
    let data = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
    let source = write(&dir, "notes.txt", &data);

    let archive = Huffman.compress(&source).expect("compression failed");
    assert_eq!(archive, dir.join("notes.txt.haff"));
    assert!(fs::metadata(&archive).unwrap().len() < data.len() as u64);

    let restored = Huffman.decompress(&archive).expect("decompression failed");
    assert_eq!(restored, dir.join("notes-HAFFMAN.txt"));
    assert_eq!(fs::read(&restored).unwrap(), data, "output doesn't match input");

    // source is left alone
    assert_eq!(fs::read(&source).unwrap(), data);
}

/// Test every codec on the same file; restored names never collide.
#[test]
fn test_all_codecs_round_trip() {
    let dir = scratch_dir("all-codecs");
    let mut data = b"aaaaaaaaaabbbbbbbbbb header ".repeat(40);
    data.extend(seeded_bytes(7, 2000));
    let source = write(&dir, "mixed.bin", &data);

    let mut restored_paths = Vec::new();
    for codec in codec::all() {
        let archive = codec.compress(&source).unwrap();
        assert_eq!(archive, dir.join(format!("mixed.bin.{}", codec.suffix())));

        let restored = codec.decompress(&archive).unwrap();
        assert_eq!(restored, dir.join(format!("mixed-{}.bin", codec.marker())));
        assert_eq!(fs::read(&restored).unwrap(), data, "{} corrupted data", codec.name());
        restored_paths.push(restored);
    }

    restored_paths.sort();
    restored_paths.dedup();
    assert_eq!(restored_paths.len(), 3);
}

/// Test that an empty file yields an empty archive and an empty restore.
#[test]
fn test_empty_file() {
    let dir = scratch_dir("empty");
    let source = write(&dir, "empty.txt", b"");

    for codec in codec::all() {
        let archive = codec.compress(&source).unwrap();
        assert_eq!(fs::metadata(&archive).unwrap().len(), 0, "{}", codec.name());

        let restored = codec.decompress(&archive).unwrap();
        assert!(fs::read(&restored).unwrap().is_empty());
    }
}

/// Test the four-byte worked example through the file contract.
#[test]
fn test_huffman_archive_layout_on_disk() {
    let dir = scratch_dir("layout");
    let source = write(&dir, "abab.dat", &[0x41, 0x41, 0x41, 0x42]);

    let archive = fs::read(Huffman.compress(&source).unwrap()).unwrap();
    assert_eq!(archive.len(), HEADER_LEN + 1);
    assert_eq!(&archive[..4], &[4, 0, 0, 0]);
    assert_eq!(&archive[4 + 0x41 * 4..4 + 0x42 * 4], &[3, 0, 0, 0]);
    assert_eq!(&archive[4 + 0x42 * 4..4 + 0x43 * 4], &[1, 0, 0, 0]);
    assert_eq!(archive[HEADER_LEN], 0x08);
}

/// Test that missing paths are reported as such by both operations.
#[test]
fn test_missing_file() {
    let dir = scratch_dir("missing");

    for codec in codec::all() {
        let missing = dir.join("nope.txt");
        assert!(matches!(
            codec.compress(&missing),
            Err(Error::FileNotFound { path }) if path == missing
        ));

        let missing_archive = dir.join(format!("nope.txt.{}", codec.suffix()));
        assert!(matches!(
            codec.decompress(&missing_archive),
            Err(Error::FileNotFound { .. })
        ));
    }
}

/// Test that an archive without the codec's suffix is refused and nothing is
/// written.
#[test]
fn test_wrong_suffix() {
    let dir = scratch_dir("wrong-suffix");
    let source = write(&dir, "plain.txt", b"not an archive");

    let rle_archive = Rle.compress(&source).unwrap();

    assert!(matches!(
        Huffman.decompress(&source),
        Err(Error::UnsupportedFormat { expected: "haff", .. })
    ));
    assert!(matches!(
        Lz78.decompress(&rle_archive),
        Err(Error::UnsupportedFormat { expected: "lz78", .. })
    ));

    let entries = fs::read_dir(&dir).unwrap().count();
    assert_eq!(entries, 2);
}

/// Test that a damaged archive file surfaces as a corrupt-archive error.
#[test]
fn test_corrupt_archive_file() {
    let dir = scratch_dir("corrupt");
    let source = write(&dir, "data.txt", b"some text worth compressing, some text");

    let archive = Huffman.compress(&source).unwrap();
    let mut bytes = fs::read(&archive).unwrap();
    bytes.truncate(HEADER_LEN - 1);
    fs::write(&archive, &bytes).unwrap();

    assert!(matches!(
        Huffman.decompress(&archive),
        Err(Error::Corrupt(CorruptArchive::HeaderTooShort { .. }))
    ));
    assert!(!dir.join("data-HAFFMAN.txt").exists());
}

/// Test the comparison runner over all codecs.
#[test]
fn test_compare_all_codecs() {
    let dir = scratch_dir("compare");
    let data = b"abcabcabcabc zzzzzzzzzzzzzzzzzzzz ".repeat(200);
    let source = write(&dir, "sample.txt", &data);

    let comparison = compare(&source, &codec::all()).expect("comparison failed");

    assert_eq!(comparison.original_bytes, data.len() as u64);
    assert_eq!(comparison.outcomes.len(), 3);
    assert!(comparison.all_verified());
    assert_eq!(comparison.failures().count(), 0);

    let best = comparison.best().expect("no best codec");
    assert!(comparison.runs().all(|run| best.ratio() <= run.ratio()));
    assert!(best.ratio() < 1.0);

    let text = comparison.export_text();
    assert!(text.contains(&format!("original_bytes={}\n", data.len())));
    assert!(text.contains("huffman.verified=true\n"));
    assert!(text.contains("rle.verified=true\n"));
    assert!(text.contains("lz78.verified=true\n"));
}

/// Test comparing a source that does not exist.
#[test]
fn test_compare_missing_source() {
    let dir = scratch_dir("compare-missing");
    assert!(matches!(
        compare(&dir.join("absent.bin"), &codec::all()),
        Err(Error::FileNotFound { .. })
    ));
}

/// Test that a codec subset runs only the named codecs, in order.
#[test]
fn test_compare_subset() {
    let dir = scratch_dir("compare-subset");
    let source = write(&dir, "random.bin", &seeded_bytes(99, 4096));

    let codecs = vec![
        codec::by_name("huffman").unwrap(),
        codec::by_name("rle").unwrap(),
    ];
    let comparison = compare(&source, &codecs).unwrap();

    let names: Vec<_> = comparison.outcomes.iter().map(|o| o.codec).collect();
    assert_eq!(names, vec!["Huffman", "RLE"]);
    assert!(comparison.all_verified());
}
