//! Genetics Engine
//!
//! Pure derivation of entity genes from a 32-byte seed. Both derivations are total,
//! deterministic and free of hidden state, so any two implementations fed the same seed
//! agree byte for byte.
//!
//! - **Rarity** (genesis entities): each seed byte is bucketed into an output band. Half of
//!   all outputs land in `[32, 64)`, the odds roughly halve with each band above, and `255`
//!   comes out with probability 1/256. Outputs never fall below 32, so rarity genes are
//!   never the all-zero "unspawned" value.
//! - **Combination** (bred entities): each gene is drawn from the closed interval spanned by
//!   the two parents' genes at the same slot.

use crate::entity::{GENE_COUNT, Genes};

/// Lower edges of the output bands above the base band.
///
/// A seed byte that reaches `RARITY_THRESHOLDS[i]` (and no later entry) selects band `5 + i`;
/// a byte below every threshold selects band 4. Reaching the last threshold yields `255`.
pub const RARITY_THRESHOLDS: [u8; 28] = [
  32, 64, 96, 128, // bands 5..=8: [0, 128) spans the four base bands
  160, 176, 187, 197, 205, 212, 218, 223, 227, 231, 234, 237, // bands 9..=20
  240, 242, 244, 246, // bands 21..=24
  248, 249, 250, 251, 252, 253, 254, // bands 25..=31
  255, // peak
];

/// Band selected by a seed byte that falls below every threshold.
const BASE_BAND: u8 = 4;

const LOW_BITS: u8 = 0b0000_0111;

/// Map one seed byte through the rarity step function.
///
/// The band chosen by the thresholds sets the high five bits; the seed's own low three bits
/// are kept.
pub fn rarity_gene(seed_byte: u8) -> u8 {
  let passed = RARITY_THRESHOLDS
    .iter()
    .take_while(|threshold| seed_byte >= **threshold)
    .count();
  if passed == RARITY_THRESHOLDS.len() {
    return u8::MAX;
  }
  let band = BASE_BAND + passed as u8;
  (band << 3) | (seed_byte & LOW_BITS)
}

/// Derive the genes of an entity without lineage.
pub fn rarity_genes(seed: &[u8; 32]) -> Genes {
  let mut genes = [0u8; GENE_COUNT];
  for (gene, byte) in genes.iter_mut().zip(seed.iter()) {
    *gene = rarity_gene(*byte);
  }
  genes
}

/// Combine one gene slot of two parents. The result always lies in `[min(a, b), max(a, b)]`.
pub fn combine_gene(a: u8, b: u8, seed_byte: u8) -> u8 {
  if a == b {
    return a;
  }
  let (low, high) = if a < b { (a, b) } else { (b, a) };
  // span reaches 256 when the parents sit at 0 and 255
  let span = u16::from(high - low) + 1;
  low + (u16::from(seed_byte) % span) as u8
}

/// Derive the genes of a bred entity from its parents' genes.
pub fn combine_genes(parent_a: &Genes, parent_b: &Genes, seed: &[u8; 32]) -> Genes {
  let mut genes = [0u8; GENE_COUNT];
  for (slot, gene) in genes.iter_mut().enumerate() {
    *gene = combine_gene(parent_a[slot], parent_b[slot], seed[slot]);
  }
  genes
}
