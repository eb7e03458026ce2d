// Vowels: initial vowels always encode to A, later ones only when vowel
// encoding is on, and then only when they are actually pronounced.

use crate::encoder::{Advance, Metaphone3};

impl Metaphone3 {
    pub(crate) fn encode_vowel(&mut self) -> Advance {
        if self.current == 0 {
            self.add("A");
        } else if self.encode_vowels {
            if self.char_at(self.current) == 'E' {
                if let Some(Advance(at)) = self.encode_e_pronounced() {
                    return self.end_of_vowel_run(at);
                }
            } else if let Some(advance) = self.skip_silent_ue() {
                return advance;
            } else if self.o_silent() {
                return self.skip(1);
            } else {
                self.add("A");
            }
        }

        self.end_of_vowel_run(self.current)
    }

    /// Where encoding resumes after the vowel at `at`: past the whole run,
    /// except after LEW- + vowel.
    fn end_of_vowel_run(&self, at: i32) -> Advance {
        if self.is_vowel_at(at - 2) || !self.string_at(at - 1, &["LEWA", "LEWO", "LEWI"]) {
            Advance(self.skip_vowels(at))
        } else {
            Advance(at + 1)
        }
    }

    /// Non-initial E, including the Greek and doubly-pronounced exceptions.
    /// Returns the position the vowel run continues from when a
    /// pronounced -ED consumed more than the E.
    fn encode_e_pronounced(&mut self) -> Option<Advance> {
        if (self.length == 4 && self.string_at(0, &["LAME", "SAKE", "PATE"]))
            || (self.length == 5 && self.string_at(0, &["AGAPE"]))
            || (self.current == 5 && self.string_at(0, &["RESUME"]))
        {
            self.add_pair("", "A");
            return None;
        }

        // "inge" => INGA, INJ
        if self.length == 4 && self.string_at(0, &["INGE"]) {
            self.add_pair("A", "");
            return None;
        }

        // two pronunciations of the -D
        if self.current == 5 && self.string_at(0, &["BLESSED", "LEARNED"]) {
            self.add_exact_approx("D", "AD", "T", "AT");
            return Some(self.skip(2));
        }

        if (!self.al_inversion && !self.e_silent() && !self.silent_internal_e())
            || self.e_pronounced_exceptions()
        {
            self.add("A");
        }

        self.al_inversion = false;
        None
    }

    /// "iron" at the start or end of a word, but not "ironic".
    fn o_silent(&self) -> bool {
        (self.current == 2 || self.current + 1 == self.last)
            && self.string_at(self.current - 2, &["IRON"])
            && !self.string_at(self.current - 2, &["IRONIC"])
    }

    fn e_silent(&self) -> bool {
        if self.current == self.last {
            return !self.e_pronounced_at_end();
        }

        // before plural S or past tense D: "grapes", "banished";
        // not "nested", "rises", "pieces"
        if self.current > 1
            && self.current + 1 == self.last
            && self.string_at(self.last, &["S", "D"])
            && !(self.string_at(self.current - 1, &["TED", "SES", "CES"])
                || self.string_at(0, &["ANTIPODES", "ANOPHELES"])
                || self.string_at(0, &["MOHAMMED", "MUHAMMED", "MOUHAMED"])
                || self.string_at(0, &["MOHAMED"])
                || self.string_at(
                    0,
                    &["NORRED", "MEDVED", "MERCED", "ALLRED", "KHALED", "RASHED", "MASJED"],
                )
                || self.string_at(0, &["JARED", "AHMED", "HAMED", "JAVED"])
                || self.string_at(0, &["ABED", "IMED"]))
        {
            return true;
        }

        // "wholeness", "boneless"
        if self.current + 4 == self.last && self.string_at(self.current + 1, &["NESS", "LESS"]) {
            return true;
        }

        self.current + 2 == self.last
            && self.string_at(self.current + 1, &["LY"])
            && !self.string_at(0, &["CICELY"])
    }

    /// Final E that is pronounced: Greek, Spanish, Japanese, Italian and
    /// French loans, German -KE names, short words.
    fn e_pronounced_at_end(&self) -> bool {
        if self.string_at(self.current - 6, &["STROPHE"]) {
            return true;
        }

        // a vowel before the E would have been eaten already
        if self.length == 2 || (self.length == 3 && !self.is_vowel_at(0)) {
            return true;
        }

        if self.string_at(
            self.last - 2,
            &["BKE", "DKE", "FKE", "KKE", "LKE", "NKE", "MKE", "PKE", "TKE", "VKE", "ZKE"],
        ) && !self.string_at(0, &["FINKE", "FUNKE"])
            && !self.string_at(0, &["FRANKE"])
        {
            return true;
        }

        if self.string_at(self.last - 4, &["SCHKE"]) {
            return true;
        }

        match self.length {
            4 => self.string_at(0, &["ACME", "NIKE", "CAFE", "RENE", "LUPE", "JOSE", "ESME"]),
            5 => self.string_at(
                0,
                &[
                    "LETHE", "CADRE", "TILDE", "SIGNE", "POSSE", "LATTE", "ANIME", "DOLCE",
                    "CROCE", "ADOBE", "OUTRE", "JESSE", "JAIME", "JAFFE", "BENGE", "RUNGE",
                    "CHILE", "DESME", "CONDE", "URIBE", "LIBRE", "ANDRE",
                ],
            ),
            6 => self.string_at(
                0,
                &[
                    "HECATE", "PSYCHE", "DAPHNE", "PENSKE", "CLICHE", "RECIPE", "TAMALE",
                    "SESAME", "SIMILE", "FINALE", "KARATE", "RENATE", "SHANTE", "OBERLE",
                    "COYOTE", "KRESGE", "STONGE", "STANGE", "SWAYZE", "FUENTE", "SALOME",
                    "URRIBE",
                ],
            ),
            7 => self.string_at(
                0,
                &[
                    "ECHIDNE", "ARIADNE", "MEINEKE", "PORSCHE", "ANEMONE", "EPITOME", "SYNCOPE",
                    "SOUFFLE", "ATTACHE", "MACHETE", "KARAOKE", "BUKKAKE", "VICENTE", "ELLERBE",
                    "VERSACE",
                ],
            ),
            8 => self.string_at(
                0,
                &[
                    "PENELOPE", "CALLIOPE", "CHIPOTLE", "ANTIGONE", "KAMIKAZE", "EURIDICE",
                    "YOSEMITE", "FERRANTE",
                ],
            ),
            9 => self.string_at(0, &["HYPERBOLE", "GUACAMOLE", "XANTHIPPE"]),
            10 => self.string_at(0, &["SYNECDOCHE"]),
            _ => false,
        }
    }

    /// Internal silent E in compounds: "roseman", "firestone", "olesen".
    fn silent_internal_e(&self) -> bool {
        let compound = |len: i32| self.e_silent_suffix(len) && !self.e_pronouncing_suffix(len);

        (self.string_at(0, &["OLE"]) && compound(3))
            || (self.string_at(
                0,
                &[
                    "BARE", "FIRE", "FORE", "GATE", "HAGE", "HAVE", "HAZE", "HOLE", "CAPE",
                    "HUSE", "LACE", "LINE", "LIVE", "LOVE", "MORE", "MOSE", "MORE", "NICE",
                    "RAKE", "ROBE", "ROSE", "SISE", "SIZE", "WARE", "WAKE", "WISE", "WINE",
                ],
            ) && compound(4))
            || (self.string_at(
                0,
                &[
                    "BLAKE", "BRAKE", "BRINE", "CARLE", "CLEVE", "DUNNE", "HEDGE", "HOUSE",
                    "JEFFE", "LUNCE", "STOKE", "STONE", "THORE", "WEDGE", "WHITE",
                ],
            ) && compound(5))
            || (self.string_at(0, &["BRIDGE", "CHEESE"]) && compound(6))
            || self.string_at(self.current - 5, &["CHARLES"])
    }

    fn e_silent_suffix(&self, at: i32) -> bool {
        self.current == at - 1
            && self.length > at + 1
            && (self.is_vowel_at(at + 1)
                || (self.string_at(at, &["ST", "SL"]) && self.length > at + 2))
    }

    /// Endings that make the E audible: "bridgewood".
    fn e_pronouncing_suffix(&self, at: i32) -> bool {
        (self.length == at + 5 && self.string_at(at, &["WATER", "WORTH"]))
            || (self.length == at + 4 && self.string_at(at, &["WOOD"]))
            || (self.length == at + 3 && self.string_at(at, &["TTE", "LIA", "NOW", "ROS", "RAS"]))
            || (self.length == at + 2
                && self.string_at(
                    at,
                    &["TA", "TT", "NA", "NO", "NE", "RS", "RE", "LA", "AU", "RO", "RA"],
                ))
            || (self.length == at + 1 && self.string_at(at, &["T", "R"]))
    }

    /// Pronounced E where it usually is silent ("herakles", "robles"), and
    /// words where the LE transposition does not apply.
    fn e_pronounced_exceptions(&self) -> bool {
        (self.current + 1 == self.last
            && (self.string_at(self.current - 3, &["OCLES", "ACLES", "AKLES"])
                || self.string_at(0, &["INES"])
                || self.string_at(
                    0,
                    &[
                        "LOPES", "ESTES", "GOMES", "NUNES", "ALVES", "ICKES", "INNES", "PERES",
                        "WAGES", "NEVES", "BENES", "DONES",
                    ],
                )
                || self.string_at(
                    0,
                    &[
                        "CORTES", "CHAVES", "VALDES", "ROBLES", "TORRES", "FLORES", "BORGES",
                        "NIEVES", "MONTES", "SOARES", "VALLES", "GEDDES", "ANDRES", "VIAJES",
                        "CALLES", "FONTES", "HERMES", "ACEVES", "BATRES", "MATHES",
                    ],
                )
                || self.string_at(
                    0,
                    &[
                        "DELORES", "MORALES", "DOLORES", "ANGELES", "ROSALES", "MIRELES",
                        "LINARES", "PERALES", "PAREDES", "BRIONES", "SANCHES", "CAZARES",
                        "REVELES", "ESTEVES", "ALVARES", "MATTHES", "SOLARES", "CASARES",
                        "CACERES", "STURGES", "RAMIRES", "FUNCHES", "BENITES", "FUENTES",
                        "PUENTES", "TABARES", "HENTGES", "VALORES",
                    ],
                )
                || self.string_at(
                    0,
                    &[
                        "GONZALES", "MERCEDES", "FAGUNDES", "JOHANNES", "GONSALES", "BERMUDES",
                        "CESPEDES", "BETANCES", "TERRONES", "DIOGENES", "CORRALES", "CABRALES",
                        "MARTINES", "GRAJALES",
                    ],
                )
                || self.string_at(
                    0,
                    &[
                        "CERVANTES", "FERNANDES", "GONCALVES", "BENEVIDES", "CIFUENTES",
                        "SIFUENTES", "SERVANTES", "HERNANDES", "BENAVIDES",
                    ],
                )
                || self.string_at(0, &["ARCHIMEDES", "CARRIZALES", "MAGALLANES"])))
            || self.string_at(self.current - 2, &["FRED", "DGES", "DRED", "GNES"])
            || self.string_at(self.current - 5, &["PROBLEM", "RESPLEN"])
            || self.string_at(self.current - 4, &["REPLEN"])
            || self.string_at(self.current - 3, &["SPLE"])
    }

    /// -UE is silent except in the listed words.
    fn skip_silent_ue(&self) -> Option<Advance> {
        let silent = self.string_at(self.current - 1, &["QUE", "GUE"])
            && !self.string_at(0, &["BARBEQUE", "PALENQUE", "APPLIQUE"])
            // -QUE, usually French without the acute accent
            && !self.string_at(0, &["RISQUE"])
            && !self.string_at(self.current - 3, &["ARGUE", "SEGUE"])
            && !self.string_at(0, &["PIROGUE", "ENRIQUE"])
            && !self.string_at(0, &["COMMUNIQUE"])
            && self.current > 1
            && (self.current + 1 == self.last || self.string_at(0, &["JACQUES"]));

        silent.then(|| Advance(self.skip_vowels(self.current)))
    }
}
