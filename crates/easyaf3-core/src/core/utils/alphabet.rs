use phf::{Set, phf_set};

static PROTEIN_RESIDUES: Set<char> = phf_set! {
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y',
};

static DNA_NUCLEOTIDES: Set<char> = phf_set! { 'A', 'T', 'C', 'G' };

static RNA_NUCLEOTIDES: Set<char> = phf_set! { 'A', 'U', 'C', 'G' };

pub fn is_protein_residue(c: char) -> bool {
    PROTEIN_RESIDUES.contains(&c.to_ascii_uppercase())
}

pub fn is_dna_nucleotide(c: char) -> bool {
    DNA_NUCLEOTIDES.contains(&c.to_ascii_uppercase())
}

pub fn is_rna_nucleotide(c: char) -> bool {
    RNA_NUCLEOTIDES.contains(&c.to_ascii_uppercase())
}

/// Returns the first character rejected by `is_allowed`, with its 1-based position.
pub fn first_invalid(sequence: &str, is_allowed: impl Fn(char) -> bool) -> Option<(usize, char)> {
    sequence
        .chars()
        .enumerate()
        .find(|&(_, c)| !is_allowed(c))
        .map(|(i, c)| (i + 1, c))
}
