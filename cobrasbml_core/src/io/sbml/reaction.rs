//! Conversion of SBML `reaction` elements into [`Reaction`]s
use indexmap::IndexMap;
use roxmltree::Node;

use crate::configuration::NotePatterns;
use crate::io::sbml::gene_association::{read_gene_association, read_subsystem, FormatLevel};
use crate::io::sbml::locate::{attribute, find_first, source_text};
use crate::io::sbml::species_ref::resolve_species_refs;
use crate::io::sbml::SbmlError;
use crate::metabolic_model::reaction::{Reaction, ReactionBuilder};
use crate::metabolic_model::species::Species;

/// Read a single `reaction` element
///
/// Species references are resolved against `species`, unresolved references are reported
/// in `warnings` and left out of the reaction.
pub fn read_reaction(
    reaction: Node,
    level: FormatLevel,
    species: &IndexMap<String, Species>,
    patterns: &NotePatterns,
    warnings: &mut Vec<String>,
) -> Result<Reaction, SbmlError> {
    let id = attribute(reaction, "id").unwrap_or_default();

    let reactants = resolve_species_refs(
        find_first(reaction, "listOfReactants"),
        id,
        species,
        warnings,
    );
    let products = resolve_species_refs(
        find_first(reaction, "listOfProducts"),
        id,
        species,
        warnings,
    );

    let notes = find_first(reaction, "notes")
        .map(source_text)
        .unwrap_or_default();
    let subsystem = read_subsystem(notes, patterns);
    let (gpr, genes) = read_gene_association(reaction, notes, level, patterns);

    Ok(ReactionBuilder::default()
        .id(id.to_string())
        .name(attribute(reaction, "name").map(|n| n.to_string()))
        .reversible(attribute(reaction, "reversible") == Some("true"))
        .reactants(reactants)
        .products(products)
        .subsystem(subsystem)
        .gpr(gpr)
        .genes(genes)
        .build()?)
}
