// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::AnnotError;
use crate::vep::tabular::split_output;

// Passed to VEP when only the headers are wanted. This works even when `--check_ref` is used
// because the header line is still produced.
pub const SAMPLE_VARIANT: &str = "chr1\t807692\t.\tC\tA\t0\tPASS\tKM=11.5\tGT\t1|1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub desc: String,
}

// name, type, description
#[rustfmt::skip]
const BUILTIN_HEADERS: &[(&str, &str, &str)] = &[
    ("Location", "string", "Location of variant in standard coordinate format (chr:start or chr:start-end)"),
    ("Allele", "string", "The variant allele used to calculate the consequence"),
    ("Gene", "string", "Stable ID of affected gene"),
    ("Feature", "string", "Stable ID of feature"),
    ("Feature_type", "string", "Type of feature - Transcript, RegulatoryFeature or MotifFeature"),
    ("Consequence", "string", "Consequence type"),
    ("cDNA_position", "string", "Relative position of base pair in cDNA sequence"),
    ("CDS_position", "string", "Relative position of base pair in coding sequence"),
    ("Protein_position", "string", "Relative position of amino acid in protein"),
    ("Amino_acids", "string", "Reference and variant amino acids"),
    ("Codons", "string", "Reference and variant codon sequence"),
    ("Existing_variation", "string", "Identifier(s) of co-located known variants"),
    ("Extra", "string", "Additional key=value annotations"),
    ("IMPACT", "string", "Subjective impact classification of consequence type"),
    ("DISTANCE", "integer", "Shortest distance from variant to transcript"),
    ("STRAND", "integer", "Strand of the feature (1/-1)"),
    ("FLAGS", "string", "Transcript quality flags"),
    ("VARIANT_CLASS", "string", "SO variant class"),
    ("SYMBOL", "string", "Gene symbol (e.g. HGNC)"),
    ("SYMBOL_SOURCE", "string", "Source of gene symbol"),
    ("HGNC_ID", "string", "Stable identifier of HGNC gene symbol"),
    ("BIOTYPE", "string", "Biotype of transcript or regulatory feature"),
    ("CANONICAL", "string", "Indicates if transcript is canonical for this gene"),
    ("TSL", "integer", "Transcript support level"),
    ("APPRIS", "string", "Annotates alternatively spliced transcripts as primary or alternate based on a range of computational methods"),
    ("CCDS", "string", "Indicates if transcript is a CCDS transcript"),
    ("ENSP", "string", "Protein identifier"),
    ("SWISSPROT", "string", "UniProtKB/Swiss-Prot accession"),
    ("TREMBL", "string", "UniProtKB/TrEMBL accession"),
    ("UNIPARC", "string", "UniParc accession"),
    ("GENE_PHENO", "string", "Indicates if gene is associated with a phenotype, disease or trait"),
    ("SIFT", "string", "SIFT prediction and/or score"),
    ("PolyPhen", "string", "PolyPhen prediction and/or score"),
    ("EXON", "string", "Exon number(s) / total"),
    ("INTRON", "string", "Intron number(s) / total"),
    ("DOMAINS", "string", "The source and identifer of any overlapping protein domains"),
    ("miRNA", "string", "SO terms of overlapped miRNA secondary structure feature(s)"),
    ("HGVSc", "string", "HGVS coding sequence name"),
    ("HGVSp", "string", "HGVS protein sequence name"),
    ("HGVS_OFFSET", "integer", "Indicates by how many bases the HGVS notations for this variant have been shifted"),
    ("AF", "float", "Frequency of existing variant in 1000 Genomes combined population"),
    ("AFR_AF", "float", "Frequency of existing variant in 1000 Genomes combined African population"),
    ("AMR_AF", "float", "Frequency of existing variant in 1000 Genomes combined American population"),
    ("EAS_AF", "float", "Frequency of existing variant in 1000 Genomes combined East Asian population"),
    ("EUR_AF", "float", "Frequency of existing variant in 1000 Genomes combined European population"),
    ("SAS_AF", "float", "Frequency of existing variant in 1000 Genomes combined South Asian population"),
    ("AA_AF", "float", "Frequency of existing variant in NHLBI-ESP African American population"),
    ("EA_AF", "float", "Frequency of existing variant in NHLBI-ESP European American population"),
    ("gnomAD_AF", "float", "Frequency of existing variant in gnomAD exomes combined population"),
    ("gnomAD_AFR_AF", "float", "Frequency of existing variant in gnomAD exomes African/American population"),
    ("gnomAD_AMR_AF", "float", "Frequency of existing variant in gnomAD exomes American population"),
    ("gnomAD_ASJ_AF", "float", "Frequency of existing variant in gnomAD exomes Ashkenazi Jewish population"),
    ("gnomAD_EAS_AF", "float", "Frequency of existing variant in gnomAD exomes East Asian population"),
    ("gnomAD_FIN_AF", "float", "Frequency of existing variant in gnomAD exomes Finnish population"),
    ("gnomAD_NFE_AF", "float", "Frequency of existing variant in gnomAD exomes Non-Finnish European population"),
    ("gnomAD_OTH_AF", "float", "Frequency of existing variant in gnomAD exomes combined other combined populations"),
    ("gnomAD_SAS_AF", "float", "Frequency of existing variant in gnomAD exomes South Asian population"),
    ("MAX_AF", "float", "Maximum observed allele frequency in 1000 Genomes, ESP and gnomAD"),
    ("MAX_AF_POPS", "string", "Populations in which maximum allele frequency was observed"),
    ("CLIN_SIG", "string", "ClinVar clinical significance of the dbSNP variant"),
    ("SOMATIC", "string", "Somatic status of existing variant"),
    ("PHENO", "string", "Indicates if existing variant(s) is associated with a phenotype, disease or trait"),
    ("PUBMED", "string", "Pubmed ID(s) of publications that cite existing variant"),
    ("MOTIF_NAME", "string", "The stable identifier of a transcription factor binding profile aligned at this position"),
    ("MOTIF_POS", "integer", "The relative position of the variation in the aligned TFBP"),
    ("HIGH_INF_POS", "string", "A flag indicating if the variant falls in a high information position of the TFBP"),
    ("MOTIF_SCORE_CHANGE", "float", "The difference in motif score of the reference and variant sequences for the TFBP"),
];

/// Describes the columns VEP may emit, keyed by column name.
#[derive(Debug, Clone)]
pub struct HeaderTable {
    entries: HashMap<String, HeaderInfo>,
}

impl HeaderTable {
    pub fn builtin() -> Self {
        HeaderTable::from_infos(BUILTIN_HEADERS.iter().map(|(name, kind, desc)| HeaderInfo {
            name: name.to_string(),
            kind: kind.to_string(),
            desc: desc.to_string(),
        }))
    }

    pub fn from_infos<I: IntoIterator<Item = HeaderInfo>>(infos: I) -> Self {
        let entries = infos
            .into_iter()
            .map(|info| (info.name.clone(), info))
            .collect();
        HeaderTable { entries }
    }

    /// Reads a JSON array of `{"name", "type", "desc"}` objects.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, AnnotError> {
        let file = File::open(path.as_ref())?;
        let infos: Vec<HeaderInfo> = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Read {} header descriptions from {}",
            infos.len(),
            path.as_ref().display()
        );
        Ok(HeaderTable::from_infos(infos))
    }

    pub fn get(&self, name: &str) -> Option<&HeaderInfo> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HeaderTable {
    fn default() -> Self {
        HeaderTable::builtin()
    }
}

/// Column names of the annotation output, without the leading variant id column.
pub fn header_names(raw: &str) -> Result<Vec<String>, AnnotError> {
    let mut names = split_output(raw)?.header_names;
    if !names.is_empty() {
        names.remove(0); // variant id
    }
    Ok(names)
}

/// Looks up every annotation column in `table`, in output order. Fails on the first unknown
/// column.
pub fn describe_headers(raw: &str, table: &HeaderTable) -> Result<Vec<HeaderInfo>, AnnotError> {
    header_names(raw)?
        .into_iter()
        .map(|name| {
            table
                .get(&name)
                .cloned()
                .ok_or(AnnotError::UnknownHeaderField(name))
        })
        .collect()
}
