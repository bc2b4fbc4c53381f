//! Static word tables, one disjoint set per language.

use wordnum_domain::Language;

/// Raw lexical data for one language.
#[derive(Debug)]
pub(crate) struct Table {
    pub(crate) units: &'static [(&'static str, f64)],
    pub(crate) tens: &'static [(&'static str, f64)],
    pub(crate) hundreds: &'static [(&'static str, f64)],
    pub(crate) magnitudes: &'static [(&'static str, f64)],
    /// Literals of the tables above that are ordinal forms.
    pub(crate) ordinals: &'static [&'static str],
    pub(crate) decimal_separators: &'static [&'static str],
    pub(crate) joiners: &'static [&'static str],
}

pub(crate) const fn table(language: Language) -> &'static Table {
    match language {
        Language::English => &ENGLISH,
        Language::Dutch => &DUTCH,
        Language::German => &GERMAN,
        Language::Portuguese => &PORTUGUESE,
    }
}

// --- English ---

const ENGLISH: Table = Table {
    units: &[
        ("zero", 0.0),
        ("a", 1.0),
        ("one", 1.0),
        ("first", 1.0),
        ("two", 2.0),
        ("second", 2.0),
        ("three", 3.0),
        ("third", 3.0),
        ("four", 4.0),
        ("fourth", 4.0),
        ("five", 5.0),
        ("fifth", 5.0),
        ("six", 6.0),
        ("sixth", 6.0),
        ("seven", 7.0),
        ("seventh", 7.0),
        ("eight", 8.0),
        ("eighth", 8.0),
        ("nine", 9.0),
        ("ninth", 9.0),
        ("ten", 10.0),
        ("tenth", 10.0),
        ("eleven", 11.0),
        ("eleventh", 11.0),
        ("twelve", 12.0),
        ("twelfth", 12.0),
        ("thirteen", 13.0),
        ("thirteenth", 13.0),
        ("fourteen", 14.0),
        ("fourteenth", 14.0),
        ("fifteen", 15.0),
        ("fifteenth", 15.0),
        ("sixteen", 16.0),
        ("sixteenth", 16.0),
        ("seventeen", 17.0),
        ("seventeenth", 17.0),
        ("eighteen", 18.0),
        ("eighteenth", 18.0),
        ("nineteen", 19.0),
        ("nineteenth", 19.0),
    ],
    tens: &[
        ("twenty", 20.0),
        ("twentieth", 20.0),
        ("thirty", 30.0),
        ("thirtieth", 30.0),
        ("forty", 40.0),
        ("fortieth", 40.0),
        ("fifty", 50.0),
        ("fiftieth", 50.0),
        ("sixty", 60.0),
        ("sixtieth", 60.0),
        ("seventy", 70.0),
        ("seventieth", 70.0),
        ("eighty", 80.0),
        ("eightieth", 80.0),
        ("ninety", 90.0),
        ("ninetieth", 90.0),
    ],
    hundreds: &[],
    magnitudes: &[
        ("hundred", 1e2),
        ("hundredth", 1e2),
        ("thousand", 1e3),
        ("thousandth", 1e3),
        ("million", 1e6),
        ("millionth", 1e6),
        ("billion", 1e9),
        ("billionth", 1e9),
        ("trillion", 1e12),
        ("quadrillion", 1e15),
        ("quintillion", 1e18),
        ("sextillion", 1e21),
        ("septillion", 1e24),
        ("octillion", 1e27),
        ("nonillion", 1e30),
        ("decillion", 1e33),
    ],
    ordinals: &[
        "first",
        "second",
        "third",
        "fourth",
        "fifth",
        "sixth",
        "seventh",
        "eighth",
        "ninth",
        "tenth",
        "eleventh",
        "twelfth",
        "thirteenth",
        "fourteenth",
        "fifteenth",
        "sixteenth",
        "seventeenth",
        "eighteenth",
        "nineteenth",
        "twentieth",
        "thirtieth",
        "fortieth",
        "fiftieth",
        "sixtieth",
        "seventieth",
        "eightieth",
        "ninetieth",
        "hundredth",
        "thousandth",
        "millionth",
        "billionth",
    ],
    decimal_separators: &["point", "dot"],
    joiners: &["and"],
};

// --- Dutch ---

const DUTCH: Table = Table {
    units: &[
        ("nul", 0.0),
        ("een", 1.0),
        ("één", 1.0),
        ("eerste", 1.0),
        ("twee", 2.0),
        ("tweede", 2.0),
        ("drie", 3.0),
        ("derde", 3.0),
        ("vier", 4.0),
        ("vierde", 4.0),
        ("vijf", 5.0),
        ("vijfde", 5.0),
        ("zes", 6.0),
        ("zesde", 6.0),
        ("zeven", 7.0),
        ("zevende", 7.0),
        ("acht", 8.0),
        ("achtste", 8.0),
        ("negen", 9.0),
        ("negende", 9.0),
        ("tien", 10.0),
        ("tiende", 10.0),
        ("elf", 11.0),
        ("elfde", 11.0),
        ("twaalf", 12.0),
        ("twaalfde", 12.0),
        ("dertien", 13.0),
        ("dertiende", 13.0),
        ("veertien", 14.0),
        ("veertiende", 14.0),
        ("vijftien", 15.0),
        ("vijftiende", 15.0),
        ("zestien", 16.0),
        ("zestiende", 16.0),
        ("zeventien", 17.0),
        ("zeventiende", 17.0),
        ("achttien", 18.0),
        ("achttiende", 18.0),
        ("negentien", 19.0),
        ("negentiende", 19.0),
    ],
    tens: &[
        ("twintig", 20.0),
        ("twintigste", 20.0),
        ("dertig", 30.0),
        ("dertigste", 30.0),
        ("veertig", 40.0),
        ("veertigste", 40.0),
        ("vijftig", 50.0),
        ("vijftigste", 50.0),
        ("zestig", 60.0),
        ("zestigste", 60.0),
        ("zeventig", 70.0),
        ("zeventigste", 70.0),
        ("tachtig", 80.0),
        ("tachtigste", 80.0),
        ("negentig", 90.0),
        ("negentigste", 90.0),
    ],
    hundreds: &[],
    magnitudes: &[
        ("honderd", 1e2),
        ("honderdste", 1e2),
        ("duizend", 1e3),
        ("miljoen", 1e6),
        ("miljard", 1e9),
        ("biljoen", 1e12),
        ("biljard", 1e15),
        ("triljoen", 1e18),
        ("triljard", 1e21),
        ("quadriljoen", 1e24),
        ("quadriljard", 1e27),
        ("quintiljoen", 1e30),
        ("quintiljard", 1e33),
    ],
    ordinals: &[
        "eerste",
        "tweede",
        "derde",
        "vierde",
        "vijfde",
        "zesde",
        "zevende",
        "achtste",
        "negende",
        "tiende",
        "elfde",
        "twaalfde",
        "dertiende",
        "veertiende",
        "vijftiende",
        "zestiende",
        "zeventiende",
        "achttiende",
        "negentiende",
        "twintigste",
        "dertigste",
        "veertigste",
        "vijftigste",
        "zestigste",
        "zeventigste",
        "tachtigste",
        "negentigste",
        "honderdste",
    ],
    decimal_separators: &["komma", "punt"],
    joiners: &["en", "ën"],
};

// --- German ---

const GERMAN: Table = Table {
    units: &[
        ("null", 0.0),
        ("ein", 1.0),
        ("eins", 1.0),
        ("zwei", 2.0),
        ("zwo", 2.0),
        ("drei", 3.0),
        ("vier", 4.0),
        ("fünf", 5.0),
        ("sechs", 6.0),
        ("sieben", 7.0),
        ("acht", 8.0),
        ("neun", 9.0),
        ("zehn", 10.0),
        ("elf", 11.0),
        ("zwölf", 12.0),
        ("dreizehn", 13.0),
        ("vierzehn", 14.0),
        ("fünfzehn", 15.0),
        ("fünzehn", 15.0),
        ("sechzehn", 16.0),
        ("siebzehn", 17.0),
        ("achtzehn", 18.0),
        ("neunzehn", 19.0),
    ],
    tens: &[
        ("zwanzig", 20.0),
        ("dreißig", 30.0),
        ("dreissig", 30.0),
        ("vierzig", 40.0),
        ("fünfzig", 50.0),
        ("sechzig", 60.0),
        ("siebzig", 70.0),
        ("achtzig", 80.0),
        ("neunzig", 90.0),
    ],
    hundreds: &[],
    magnitudes: &[
        ("hundert", 1e2),
        ("tausend", 1e3),
        ("million", 1e6),
        ("millionen", 1e6),
        ("milliarde", 1e9),
        ("billion", 1e12),
        ("billiarde", 1e15),
        ("trillion", 1e18),
    ],
    ordinals: &[],
    decimal_separators: &["komma"],
    joiners: &["und"],
};

// --- Portuguese ---

const PORTUGUESE: Table = Table {
    units: &[
        ("zero", 0.0),
        ("um", 1.0),
        ("uma", 1.0),
        ("primeiro", 1.0),
        ("primeira", 1.0),
        ("primeiros", 1.0),
        ("primeiras", 1.0),
        ("dois", 2.0),
        ("duas", 2.0),
        ("segundo", 2.0),
        ("segunda", 2.0),
        ("segundos", 2.0),
        ("segundas", 2.0),
        ("tres", 3.0),
        ("três", 3.0),
        ("terceiro", 3.0),
        ("terceira", 3.0),
        ("terceiros", 3.0),
        ("terceiras", 3.0),
        ("quatro", 4.0),
        ("quarto", 4.0),
        ("quarta", 4.0),
        ("quartos", 4.0),
        ("quartas", 4.0),
        ("cinco", 5.0),
        ("quinto", 5.0),
        ("quinta", 5.0),
        ("quintos", 5.0),
        ("quintas", 5.0),
        ("seis", 6.0),
        ("sexto", 6.0),
        ("sexta", 6.0),
        ("sextos", 6.0),
        ("sextas", 6.0),
        ("sete", 7.0),
        ("setimo", 7.0),
        ("setima", 7.0),
        ("setimos", 7.0),
        ("setimas", 7.0),
        ("oito", 8.0),
        ("oitavo", 8.0),
        ("oitava", 8.0),
        ("oitavos", 8.0),
        ("oitavas", 8.0),
        ("nove", 9.0),
        ("nono", 9.0),
        ("nona", 9.0),
        ("nonos", 9.0),
        ("nonas", 9.0),
        ("dez", 10.0),
        ("onze", 11.0),
        ("doze", 12.0),
        ("treze", 13.0),
        ("quatorze", 14.0),
        ("catorze", 14.0),
        ("quinze", 15.0),
        ("dezesseis", 16.0),
        ("dezessete", 17.0),
        ("dezoito", 18.0),
        ("dezenove", 19.0),
    ],
    tens: &[
        ("decimo", 10.0),
        ("decima", 10.0),
        ("decimos", 10.0),
        ("decimas", 10.0),
        ("vinte", 20.0),
        ("vigesimo", 20.0),
        ("vigesima", 20.0),
        ("vigesimos", 20.0),
        ("vigesimas", 20.0),
        ("trinta", 30.0),
        ("trigesimo", 30.0),
        ("trigesima", 30.0),
        ("trigesimos", 30.0),
        ("trigesimas", 30.0),
        ("quarenta", 40.0),
        ("quadragesimo", 40.0),
        ("quadragesima", 40.0),
        ("quadragesimos", 40.0),
        ("quadragesimas", 40.0),
        ("cinquenta", 50.0),
        ("quinquagesimo", 50.0),
        ("quinquagesima", 50.0),
        ("quinquagesimos", 50.0),
        ("quinquagesimas", 50.0),
        ("sessenta", 60.0),
        ("sexagesimo", 60.0),
        ("sexagesima", 60.0),
        ("sexagesimos", 60.0),
        ("sexagesimas", 60.0),
        ("setenta", 70.0),
        ("septuagesimo", 70.0),
        ("septuagesima", 70.0),
        ("septuagesimos", 70.0),
        ("septuagesimas", 70.0),
        ("oitenta", 80.0),
        ("octogesimo", 80.0),
        ("octogesima", 80.0),
        ("octogesimos", 80.0),
        ("octogesimas", 80.0),
        ("noventa", 90.0),
        ("nonagesimo", 90.0),
        ("nonagesima", 90.0),
        ("nonagesimos", 90.0),
        ("nonagesimas", 90.0),
    ],
    hundreds: &[
        ("cem", 100.0),
        ("cento", 100.0),
        ("centesimo", 100.0),
        ("centesima", 100.0),
        ("centesimos", 100.0),
        ("centesimas", 100.0),
        ("duzentos", 200.0),
        ("duzentas", 200.0),
        ("duzentesimo", 200.0),
        ("duzentesima", 200.0),
        ("duzentesimos", 200.0),
        ("duzentesimas", 200.0),
        ("trezentos", 300.0),
        ("trezentas", 300.0),
        ("trecentesimo", 300.0),
        ("trecentesima", 300.0),
        ("trecentesimos", 300.0),
        ("trecentesimas", 300.0),
        ("quatrocentos", 400.0),
        ("quatrocentas", 400.0),
        ("quatrocentesimo", 400.0),
        ("quatrocentesima", 400.0),
        ("quatrocentesimos", 400.0),
        ("quatrocentesimas", 400.0),
        ("quinhentos", 500.0),
        ("quinhentas", 500.0),
        ("quingentesimo", 500.0),
        ("quingentesima", 500.0),
        ("quingentesimos", 500.0),
        ("quingentesimas", 500.0),
        ("seiscentos", 600.0),
        ("seiscentas", 600.0),
        ("sexcentesimo", 600.0),
        ("sexcentesima", 600.0),
        ("sexcentesimos", 600.0),
        ("sexcentesimas", 600.0),
        ("setecentos", 700.0),
        ("setecentas", 700.0),
        ("septingentesimo", 700.0),
        ("septingentesima", 700.0),
        ("septingentesimos", 700.0),
        ("septingentesimas", 700.0),
        ("oitocentos", 800.0),
        ("oitocentas", 800.0),
        ("octingentesimo", 800.0),
        ("octingentesima", 800.0),
        ("octingentesimos", 800.0),
        ("octingentesimas", 800.0),
        ("novecentos", 900.0),
        ("novecentas", 900.0),
        ("nongentesimo", 900.0),
        ("nongentesima", 900.0),
        ("noningentesimos", 900.0),
        ("noningentesimas", 900.0),
    ],
    magnitudes: &[
        ("mil", 1e3),
        ("milesimo", 1e3),
        ("milesima", 1e3),
        ("milesimos", 1e3),
        ("milesimas", 1e3),
        ("milhao", 1e6),
        ("milhão", 1e6),
        ("milhoes", 1e6),
        ("milhões", 1e6),
        ("milionesimo", 1e6),
        ("milionesima", 1e6),
        ("milionesimos", 1e6),
        ("milionesimas", 1e6),
        ("bilhao", 1e9),
        ("bilhão", 1e9),
        ("bilhoes", 1e9),
        ("bilhões", 1e9),
        ("bilionesimo", 1e9),
        ("bilionesima", 1e9),
        ("bilionesimos", 1e9),
        ("bilionesimas", 1e9),
        ("trilhao", 1e12),
        ("trilhão", 1e12),
        ("trilhoes", 1e12),
        ("trilhões", 1e12),
        ("trilionesimo", 1e12),
        ("trilionesima", 1e12),
        ("trilionesimos", 1e12),
        ("trilionesimas", 1e12),
    ],
    ordinals: &[
        "primeiro",
        "primeira",
        "segundo",
        "segunda",
        "terceiro",
        "terceira",
        "quarto",
        "quarta",
        "quinto",
        "quinta",
        "sexto",
        "sexta",
        "setimo",
        "setima",
        "oitavo",
        "oitava",
        "nono",
        "nona",
        "decimo",
        "decima",
        "vigesimo",
        "vigesima",
        "trigesimo",
        "trigesima",
        "centesimo",
        "centesima",
        "milesimo",
        "milesima",
    ],
    decimal_separators: &["virgula", "vírgula"],
    joiners: &["e"],
};
