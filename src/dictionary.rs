//! Exact dictionary lookup for unambiguous spelling pairs.
//!
//! Whole-word, case-insensitive lookup against the merged built-in + user
//! table, with case restored on the replacement. Lookup falls back through a
//! fixed chain: bare word, possessive-stripped, quote-stripped, generic
//! punctuation-stripped, then each hyphen segment of a compound
//! independently. Words owned by the contextual disambiguator never enter
//! the table, and recognized URLs are never looked up.
//!
//! # Examples
//!
//! ```
//! use anglicise::config::WordConfig;
//! use anglicise::dictionary::Dictionary;
//!
//! let dictionary = Dictionary::from_config(&WordConfig::default());
//! let replacements = dictionary.detect("The color of Flavor");
//!
//! assert_eq!(replacements.len(), 2);
//! assert_eq!(replacements[0].text, "colour");
//! assert_eq!(replacements[1].text, "Flavour");
//! ```

use ahash::AHashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::WordConfig;
use crate::span::Replacement;
use crate::util::{is_url, match_case};

/// Built-in American→British spelling table. Keys are lowercase; case is
/// restored from the original token at replacement time. The inverse
/// direction is reachable by supplying the inverted table as overrides.
const AMERICAN_TO_BRITISH: &[(&str, &str)] = &[
    // -or → -our
    ("armor", "armour"),
    ("armored", "armoured"),
    ("behavior", "behaviour"),
    ("behavioral", "behavioural"),
    ("behaviors", "behaviours"),
    ("candor", "candour"),
    ("clamor", "clamour"),
    ("color", "colour"),
    ("colored", "coloured"),
    ("colorful", "colourful"),
    ("coloring", "colouring"),
    ("colorless", "colourless"),
    ("colors", "colours"),
    ("demeanor", "demeanour"),
    ("discolor", "discolour"),
    ("discolored", "discoloured"),
    ("endeavor", "endeavour"),
    ("endeavors", "endeavours"),
    ("favor", "favour"),
    ("favorable", "favourable"),
    ("favored", "favoured"),
    ("favorite", "favourite"),
    ("favorites", "favourites"),
    ("favoritism", "favouritism"),
    ("favors", "favours"),
    ("fervor", "fervour"),
    ("flavor", "flavour"),
    ("flavored", "flavoured"),
    ("flavoring", "flavouring"),
    ("flavors", "flavours"),
    ("harbor", "harbour"),
    ("harbors", "harbours"),
    ("honor", "honour"),
    ("honorable", "honourable"),
    ("honored", "honoured"),
    ("honors", "honours"),
    ("humor", "humour"),
    ("labor", "labour"),
    ("labored", "laboured"),
    ("laborer", "labourer"),
    ("laborers", "labourers"),
    ("labors", "labours"),
    ("multicolored", "multicoloured"),
    ("neighbor", "neighbour"),
    ("neighborhood", "neighbourhood"),
    ("neighborhoods", "neighbourhoods"),
    ("neighboring", "neighbouring"),
    ("neighbors", "neighbours"),
    ("odor", "odour"),
    ("odors", "odours"),
    ("parlor", "parlour"),
    ("rancor", "rancour"),
    ("rigor", "rigour"),
    ("rigors", "rigours"),
    ("rumor", "rumour"),
    ("rumored", "rumoured"),
    ("rumors", "rumours"),
    ("savor", "savour"),
    ("savory", "savoury"),
    ("splendor", "splendour"),
    ("tumor", "tumour"),
    ("tumors", "tumours"),
    ("valor", "valour"),
    ("vapor", "vapour"),
    ("vapors", "vapours"),
    ("vigor", "vigour"),
    ("watercolor", "watercolour"),
    ("watercolors", "watercolours"),
    // -er → -re
    ("caliber", "calibre"),
    ("calibers", "calibres"),
    ("center", "centre"),
    ("centered", "centred"),
    ("centers", "centres"),
    ("fiber", "fibre"),
    ("fibers", "fibres"),
    ("liter", "litre"),
    ("liters", "litres"),
    ("luster", "lustre"),
    ("maneuver", "manoeuvre"),
    ("maneuvers", "manoeuvres"),
    ("meager", "meagre"),
    ("saber", "sabre"),
    ("scepter", "sceptre"),
    ("somber", "sombre"),
    ("specter", "spectre"),
    ("theater", "theatre"),
    ("theaters", "theatres"),
    // -ize → -ise
    ("analyze", "analyse"),
    ("analyzed", "analysed"),
    ("analyzes", "analyses"),
    ("analyzer", "analyser"),
    ("analyzers", "analysers"),
    ("analyzing", "analysing"),
    ("apologize", "apologise"),
    ("apologized", "apologised"),
    ("apologizes", "apologises"),
    ("capitalize", "capitalise"),
    ("capitalized", "capitalised"),
    ("categorize", "categorise"),
    ("categorized", "categorised"),
    ("characterize", "characterise"),
    ("characterized", "characterised"),
    ("criticize", "criticise"),
    ("criticized", "criticised"),
    ("criticizes", "criticises"),
    ("customize", "customise"),
    ("customized", "customised"),
    ("emphasize", "emphasise"),
    ("emphasized", "emphasised"),
    ("emphasizes", "emphasises"),
    ("equalize", "equalise"),
    ("finalize", "finalise"),
    ("finalized", "finalised"),
    ("generalize", "generalise"),
    ("generalized", "generalised"),
    ("initialize", "initialise"),
    ("initialized", "initialised"),
    ("initializes", "initialises"),
    ("initializing", "initialising"),
    ("italicize", "italicise"),
    ("localize", "localise"),
    ("localized", "localised"),
    ("maximize", "maximise"),
    ("maximized", "maximised"),
    ("memorize", "memorise"),
    ("memorized", "memorised"),
    ("minimize", "minimise"),
    ("minimized", "minimised"),
    ("modernize", "modernise"),
    ("modernized", "modernised"),
    ("normalize", "normalise"),
    ("normalized", "normalised"),
    ("optimize", "optimise"),
    ("optimized", "optimised"),
    ("optimizes", "optimises"),
    ("optimizing", "optimising"),
    ("organization", "organisation"),
    ("organizations", "organisations"),
    ("organize", "organise"),
    ("organized", "organised"),
    ("organizer", "organiser"),
    ("organizes", "organises"),
    ("organizing", "organising"),
    ("paralyze", "paralyse"),
    ("paralyzed", "paralysed"),
    ("personalize", "personalise"),
    ("personalized", "personalised"),
    ("prioritize", "prioritise"),
    ("prioritized", "prioritised"),
    ("realize", "realise"),
    ("realized", "realised"),
    ("realizes", "realises"),
    ("realizing", "realising"),
    ("recognize", "recognise"),
    ("recognized", "recognised"),
    ("recognizes", "recognises"),
    ("recognizing", "recognising"),
    ("serialize", "serialise"),
    ("serialized", "serialised"),
    ("specialize", "specialise"),
    ("specialized", "specialised"),
    ("standardize", "standardise"),
    ("standardized", "standardised"),
    ("summarize", "summarise"),
    ("summarized", "summarised"),
    ("symbolize", "symbolise"),
    ("sympathize", "sympathise"),
    ("synchronize", "synchronise"),
    ("synchronized", "synchronised"),
    ("synthesize", "synthesise"),
    ("utilize", "utilise"),
    ("utilized", "utilised"),
    ("visualize", "visualise"),
    ("visualized", "visualised"),
    // -og → -ogue
    ("analog", "analogue"),
    ("analogs", "analogues"),
    ("catalog", "catalogue"),
    ("cataloged", "catalogued"),
    ("catalogs", "catalogues"),
    ("dialog", "dialogue"),
    ("dialogs", "dialogues"),
    ("epilog", "epilogue"),
    // -ense → -ence
    ("defense", "defence"),
    ("defenses", "defences"),
    ("offense", "offence"),
    ("offenses", "offences"),
    ("pretense", "pretence"),
    ("pretenses", "pretences"),
    // -eled / -eling
    ("canceled", "cancelled"),
    ("canceling", "cancelling"),
    ("fueled", "fuelled"),
    ("labeled", "labelled"),
    ("labeling", "labelling"),
    ("marveled", "marvelled"),
    ("modeled", "modelled"),
    ("modeling", "modelling"),
    ("signaled", "signalled"),
    ("totaled", "totalled"),
    ("traveled", "travelled"),
    ("traveler", "traveller"),
    ("travelers", "travellers"),
    ("traveling", "travelling"),
    // Miscellaneous
    ("aging", "ageing"),
    ("airplane", "aeroplane"),
    ("airplanes", "aeroplanes"),
    ("aluminum", "aluminium"),
    ("anemia", "anaemia"),
    ("anesthesia", "anaesthesia"),
    ("artifact", "artefact"),
    ("artifacts", "artefacts"),
    ("ax", "axe"),
    ("counselor", "counsellor"),
    ("counselors", "counsellors"),
    ("cozy", "cosy"),
    ("donut", "doughnut"),
    ("donuts", "doughnuts"),
    ("enroll", "enrol"),
    ("enrollment", "enrolment"),
    ("esthetic", "aesthetic"),
    ("fetus", "foetus"),
    ("fulfill", "fulfil"),
    ("fulfillment", "fulfilment"),
    ("gray", "grey"),
    ("grayed", "greyed"),
    ("grayish", "greyish"),
    ("grays", "greys"),
    ("installment", "instalment"),
    ("installments", "instalments"),
    ("jewelry", "jewellery"),
    ("judgment", "judgement"),
    ("judgments", "judgements"),
    ("leukemia", "leukaemia"),
    ("licorice", "liquorice"),
    ("marvelous", "marvellous"),
    ("mold", "mould"),
    ("molding", "moulding"),
    ("molt", "moult"),
    ("mustache", "moustache"),
    ("omelet", "omelette"),
    ("pajamas", "pyjamas"),
    ("pediatric", "paediatric"),
    ("plow", "plough"),
    ("plowed", "ploughed"),
    ("skeptic", "sceptic"),
    ("skeptical", "sceptical"),
    ("skepticism", "scepticism"),
    ("smolder", "smoulder"),
    ("sulfur", "sulphur"),
    ("willful", "wilful"),
    ("woolen", "woollen"),
];

/// Characters stripped by the quote fallback. Smart quotes are included so
/// lookup works whether or not the caller normalized them.
const QUOTE_CHARS: &[char] = &['\'', '"', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Case-preserving word→word replacement table.
///
/// Built once from the built-in table plus user overrides, minus any word
/// owned by the contextual disambiguator; read-only thereafter.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: AHashMap<String, String>,
}

impl Dictionary {
    /// Build the merged lookup table for `config`.
    pub fn from_config(config: &WordConfig) -> Self {
        let mut entries = AHashMap::with_capacity(
            AMERICAN_TO_BRITISH.len() + config.dictionary_overrides.len(),
        );
        for (american, british) in AMERICAN_TO_BRITISH {
            if config.is_contextual(american) {
                continue;
            }
            entries.insert((*american).to_string(), (*british).to_string());
        }
        for (from, to) in &config.dictionary_overrides {
            let key = from.to_lowercase();
            if config.is_contextual(&key) {
                continue;
            }
            entries.insert(key, to.clone());
        }
        Dictionary { entries }
    }

    /// Build a dictionary from an explicit table, bypassing the built-ins.
    /// Used for the inverse direction.
    pub fn from_table<I>(table: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries = table
            .into_iter()
            .map(|(from, to)| (from.to_lowercase(), to))
            .collect();
        Dictionary { entries }
    }

    /// The inverted table (British→American for the default build).
    pub fn inverted(&self) -> Dictionary {
        Dictionary {
            entries: self
                .entries
                .iter()
                .map(|(from, to)| (to.clone(), from.clone()))
                .collect(),
        }
    }

    /// Number of entries in the merged table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `word` case-insensitively, restoring its case pattern onto
    /// the replacement.
    pub fn lookup(&self, word: &str) -> Option<String> {
        self.entries
            .get(&word.to_lowercase())
            .map(|replacement| match_case(word, replacement))
    }

    /// Scan `text` and produce replacement spans for every dictionary hit.
    ///
    /// Offsets index `text`; the output is strictly increasing in `start`
    /// and non-overlapping by construction (fallbacks never nest).
    pub fn detect(&self, text: &str) -> Vec<Replacement> {
        let mut replacements = Vec::new();
        for (offset, chunk) in whitespace_chunks(text) {
            if is_url(chunk) {
                continue;
            }
            self.match_chunk(offset, chunk, &mut replacements);
        }
        replacements
    }

    /// Try the fallback chain on one whitespace-delimited chunk.
    fn match_chunk(&self, offset: usize, chunk: &str, out: &mut Vec<Replacement>) {
        // Bare word.
        if let Some(replacement) = self.lookup(chunk) {
            out.push(Replacement::new(offset, offset + chunk.len(), replacement));
            return;
        }

        // Possessive: "color's" / "colors'".
        if let Some(core) = chunk
            .strip_suffix("'s")
            .or_else(|| chunk.strip_suffix("\u{2019}s"))
            .or_else(|| chunk.strip_suffix('\''))
            .or_else(|| chunk.strip_suffix('\u{2019}'))
        {
            if let Some(replacement) = self.lookup(core) {
                out.push(Replacement::new(offset, offset + core.len(), replacement));
                return;
            }
        }

        // Quote-stripped, tolerating nesting and a trailing comma:
        // "'color'", "\"color\",".
        let without_comma = chunk.strip_suffix(',').unwrap_or(chunk);
        let quoted = without_comma.trim_matches(QUOTE_CHARS);
        if quoted.len() != chunk.len() {
            let inner_offset = offset + (without_comma.len() - without_comma.trim_start_matches(QUOTE_CHARS).len());
            if let Some(replacement) = self.lookup(quoted) {
                out.push(Replacement::new(
                    inner_offset,
                    inner_offset + quoted.len(),
                    replacement,
                ));
                return;
            }
        }

        // Generic punctuation strip: "(color)", "color!".
        let start_trim = chunk.len() - chunk.trim_start_matches(|c: char| !c.is_alphanumeric()).len();
        let core = chunk[start_trim..].trim_end_matches(|c: char| !c.is_alphanumeric());
        if !core.is_empty() && core.len() != chunk.len() {
            if let Some(replacement) = self.lookup(core) {
                out.push(Replacement::new(
                    offset + start_trim,
                    offset + start_trim + core.len(),
                    replacement,
                ));
                return;
            }
        }

        // Hyphen segments of a compound, each looked up independently:
        // "color-coded" → "colour-coded". Word-bound iteration also covers
        // embedded quotes the earlier fallbacks missed.
        if core.contains('-') || core.contains(QUOTE_CHARS) {
            for (segment_offset, segment) in core.split_word_bound_indices() {
                if segment.chars().all(|c| c.is_alphabetic()) {
                    if let Some(replacement) = self.lookup(segment) {
                        let start = offset + start_trim + segment_offset;
                        out.push(Replacement::new(start, start + segment.len(), replacement));
                    }
                }
            }
        }
    }
}

/// Iterate whitespace-delimited chunks with their byte offsets.
fn whitespace_chunks(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_whitespace()
        .map(move |chunk| (chunk.as_ptr() as usize - text.as_ptr() as usize, chunk))
}
