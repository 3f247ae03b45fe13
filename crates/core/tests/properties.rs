//! Property-based tests for the codecs and the Huffman code construction.

use archiver_core::{
    codes::CodeTable,
    frequency::FrequencyTable,
    header::HEADER_LEN,
    huffman, lz78, rle,
    tree::HuffmanTree,
};
use proptest::prelude::*;

/// Byte strings with a small alphabet, so runs and repeated phrases show up.
fn skewed_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', 0u8, 255u8]), 0..2048)
}

proptest! {
    #[test]
    fn prop_huffman_round_trip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let archive = huffman::compress(&data).unwrap();
        prop_assert_eq!(huffman::decompress(&archive).unwrap(), data);
    }

    #[test]
    fn prop_huffman_round_trip_skewed(data in skewed_bytes()) {
        let archive = huffman::compress(&data).unwrap();
        prop_assert_eq!(huffman::decompress(&archive).unwrap(), data);
    }

    #[test]
    fn prop_rle_round_trip(data in skewed_bytes()) {
        prop_assert_eq!(rle::decompress(&rle::compress(&data)).unwrap(), data);
    }

    #[test]
    fn prop_lz78_round_trip(data in skewed_bytes()) {
        let archive = lz78::compress(&data).unwrap();
        prop_assert_eq!(lz78::decompress(&archive).unwrap(), data);
    }

    #[test]
    fn prop_huffman_deterministic(data in prop::collection::vec(any::<u8>(), 1..1024)) {
        prop_assert_eq!(huffman::compress(&data).unwrap(), huffman::compress(&data).unwrap());
    }

    #[test]
    fn prop_huffman_archive_length(data in prop::collection::vec(any::<u8>(), 1..2048)) {
        let frequencies = FrequencyTable::from_bytes(&data).unwrap();
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let codes = CodeTable::from_tree(&tree).unwrap();
        let bits = codes.encoded_bits(&frequencies);

        let archive = huffman::compress(&data).unwrap();
        prop_assert_eq!(archive.len() as u64, HEADER_LEN as u64 + bits.div_ceil(8));

        let declared = u32::from_le_bytes(archive[..4].try_into().unwrap());
        prop_assert_eq!(declared, data.len() as u32);
    }

    #[test]
    fn prop_codes_are_prefix_free(data in prop::collection::vec(any::<u8>(), 1..1024)) {
        let frequencies = FrequencyTable::from_bytes(&data).unwrap();
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let codes = CodeTable::from_tree(&tree).unwrap();

        let assigned: Vec<_> = codes.iter().collect();
        prop_assert_eq!(assigned.len(), frequencies.distinct());
        for (a, code_a) in &assigned {
            prop_assert!(!code_a.is_empty());
            for (b, code_b) in &assigned {
                if a != b {
                    prop_assert!(!code_a.is_prefix_of(code_b));
                }
            }
        }
    }

    #[test]
    fn prop_heavier_symbols_get_shorter_codes(data in prop::collection::vec(any::<u8>(), 1..1024)) {
        let frequencies = FrequencyTable::from_bytes(&data).unwrap();
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let codes = CodeTable::from_tree(&tree).unwrap();

        for (a, code_a) in codes.iter() {
            for (b, code_b) in codes.iter() {
                if frequencies.get(a) > frequencies.get(b) {
                    prop_assert!(code_a.len() <= code_b.len());
                }
            }
        }
    }
}
