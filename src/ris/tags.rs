//! RIS format tags, reference type codes and their descriptions.
//!
//! Every tag carries a long description (the wording of the RIS reference
//! documentation) and, for all tags except `ER`, a short description. The
//! short description is the alias key under which a parsed [`Record`]
//! exposes the tag's value.
//!
//! See: http://en.wikipedia.org/wiki/RIS_(file_format)
//!
//! [`Record`]: crate::ris::Record

use compact_str::CompactString;

/// Key of the derived alias holding the human label of the reference type.
pub const TYPE_OF_REFERENCE_LONG: &str = "Type of reference (long)";

/// Tags whose values are author names, in the order authors are collected.
pub const AUTHOR_TAGS: [RisTag; 5] = [
    RisTag::AuthorPrimary,
    RisTag::AuthorSecondary,
    RisTag::AuthorTertiary,
    RisTag::AuthorSubsidiary,
    RisTag::Author,
];

macro_rules! ris_tags {
    ($($variant:ident => $tag:literal, $long:literal, $short:expr;)*) => {
        /// RIS format tags.
        ///
        /// RIS (Research Information Systems) is a standardized tag format developed by
        /// Research Information Systems for expressing bibliographic citations.
        #[allow(clippy::upper_case_acronyms)]
        #[non_exhaustive]
        #[derive(Debug, Eq, PartialEq, Hash, Clone)]
        pub enum RisTag {
            $(
                #[doc = concat!($tag, " - ", $long)]
                $variant,
            )*
            /// Unknown tag
            Unknown(CompactString),
        }

        impl RisTag {
            /// Convert a string tag to a RisTag enum.
            pub fn from_tag(tag: &str) -> Self {
                match tag {
                    $($tag => RisTag::$variant,)*
                    _ => RisTag::Unknown(CompactString::from(tag)),
                }
            }

            /// Convert a RisTag enum back to its string representation.
            pub fn as_tag(&self) -> &str {
                match self {
                    $(RisTag::$variant => $tag,)*
                    RisTag::Unknown(tag) => tag,
                }
            }

            /// Long human description of the tag.
            pub fn long_description(&self) -> Option<&'static str> {
                match self {
                    $(RisTag::$variant => Some($long),)*
                    RisTag::Unknown(_) => None,
                }
            }

            /// Short human description of the tag, used as the alias key.
            pub fn short_description(&self) -> Option<&'static str> {
                match self {
                    $(RisTag::$variant => $short,)*
                    RisTag::Unknown(_) => None,
                }
            }
        }
    };
}

ris_tags! {
    Type => "TY", "Type of reference (must be the first tag; see `ReferenceType`)", Some("Type of reference");
    AuthorPrimary => "A1", "Primary Authors (each author on its own line preceded by the A1 tag)", Some("Primary authors");
    AuthorSecondary => "A2", "Secondary Authors (each author on its own line preceded by the A2 tag)", Some("Secondary authors");
    AuthorTertiary => "A3", "Tertiary Authors (each author on its own line preceded by the A3 tag)", Some("Tertiary authors");
    AuthorSubsidiary => "A4", "Subsidiary Authors (each author on its own line preceded by the A4 tag)", Some("Subsidiary authors");
    Abstract => "AB", "Abstract", Some("Abstract");
    AuthorAddress => "AD", "Author Address", Some("Author address");
    AccessionNumber => "AN", "Accession Number", Some("Accession number");
    Author => "AU", "Author (each author on its own line preceded by the AU tag)", Some("Author");
    ArchiveLocation => "AV", "Location in Archives", Some("Location in archives");
    SecondaryTitleExtended => "BT", "This field maps to T2 for all reference types except for Whole Book and Unpublished Work references. It can contain alphanumeric characters. There is no practical limit to the length of this field.", Some("Secondary title extended");
    Custom1 => "C1", "Custom 1", Some("Custom 1");
    Custom2 => "C2", "Custom 2", Some("Custom 2");
    Custom3 => "C3", "Custom 3", Some("Custom 3");
    Custom4 => "C4", "Custom 4", Some("Custom 4");
    Custom5 => "C5", "Custom 5", Some("Custom 5");
    Custom6 => "C6", "Custom 6", Some("Custom 6");
    Custom7 => "C7", "Custom 7", Some("Custom 7");
    Custom8 => "C8", "Custom 8", Some("Custom 8");
    Caption => "CA", "Caption", Some("Caption");
    CallNumber => "CN", "Call Number", Some("Call number");
    Alphanumeric => "CP", "This field can contain alphanumeric characters. There is no practical limit to the length of this field.", Some("Alphanumeric characters");
    UnpublishedTitle => "CT", "Title of unpublished reference", Some("Title of unpublished reference");
    PlacePublished => "CY", "Place Published", Some("Place published");
    Date => "DA", "Date", Some("Date");
    DatabaseName => "DB", "Name of Database", Some("Name of database");
    Doi => "DO", "DOI", Some("DOI");
    DatabaseProvider => "DP", "Database Provider", Some("Database provider");
    Editor => "ED", "Editor", Some("Editor");
    EndPage => "EP", "End Page", Some("End page");
    Edition => "ET", "Edition", Some("Edition");
    ReferenceId => "ID", "Reference ID", Some("Reference ID");
    Issue => "IS", "Issue number", Some("Issue number");
    PeriodicalUserAbbreviation => "J1", "Periodical name: user abbreviation 1. This is an alphanumeric field of up to 255 characters.", Some("User abbreviation 1");
    AlternateTitle => "J2", "Alternate Title (this field is used for the abbreviated title of a book or journal name, the latter mapped to T2)", Some("Alternate title");
    JournalAbbreviation => "JA", "Periodical name: standard abbreviation. This is the periodical in which the article was (or is to be, in the case of in-press references) published. This is an alphanumeric field of up to 255 characters.", Some("Standard abbreviation");
    JournalFull => "JF", "Journal/Periodical name: full format. This is an alphanumeric field of up to 255 characters.", Some("Journal/Periodical name");
    JournalFullAlternative => "JO", "Journal/Periodical name: full format. This is an alphanumeric field of up to 255 characters.", Some("Journal/Periodical name 2");
    Keywords => "KW", "Keywords (keywords should be entered each on its own line preceded by the tag)", Some("Keywords");
    LinkPdf => "L1", "Link to PDF. There is no practical limit to the length of this field. URL addresses can be entered individually, one per tag or multiple addresses can be entered on one line using a semi-colon as a separator. These links should end with a file name, and not simply a landing page. Use the UR tag for URL links.", Some("Link to PDF");
    LinkFullText => "L2", "Link to Full-text. There is no practical limit to the length of this field. URL addresses can be entered individually, one per tag or multiple addresses can be entered on one line using a semi-colon as a separator.", Some("Link to full-text");
    LinkRelated => "L3", "Related Records. There is no practical limit to the length of this field.", Some("Related records");
    LinkImages => "L4", "Image(s). There is no practical limit to the length of this field.", Some("Image(s)");
    Language => "LA", "Language", Some("Language");
    Label => "LB", "Label", Some("Label");
    Link => "LK", "Website Link", Some("Website link");
    Number => "M1", "Number", Some("Number");
    Miscellaneous2 => "M2", "Miscellaneous 2. This is an alphanumeric field and there is no practical limit to the length of this field.", Some("Miscellaneous 2");
    TypeOfWork => "M3", "Type of Work", Some("Type of work");
    Notes => "N1", "Notes", Some("Notes");
    AbstractAlternative => "N2", "Abstract. This is a free text field and can contain alphanumeric characters. There is no practical length limit to this field.", Some("Abstract N2");
    NumberOfVolumes => "NV", "Number of Volumes", Some("Number of volumes");
    OriginalPublication => "OP", "Original Publication", Some("Original publication");
    Publisher => "PB", "Publisher", Some("Publisher");
    PublishingPlace => "PP", "Publishing Place", Some("Publishing place");
    PublicationYear => "PY", "Publication year (YYYY)", Some("Publication year");
    ReviewedItem => "RI", "Reviewed Item", Some("Reviewed item");
    ResearchNotes => "RN", "Research Notes", Some("Research notes");
    ReprintEdition => "RP", "Reprint Edition", Some("Reprint edition");
    Section => "SE", "Section", Some("Section");
    SerialNumber => "SN", "ISBN/ISSN", Some("ISBN/ISSN");
    StartPage => "SP", "Start Page", Some("Start page");
    ShortTitle => "ST", "Short Title", Some("Short title");
    TitleAlternative => "T1", "Primary Title", Some("Primary title");
    SecondaryTitle => "T2", "Secondary Title (journal title, if applicable)", Some("Secondary title");
    TertiaryTitle => "T3", "Tertiary Title", Some("Tertiary title");
    TranslatedAuthor => "TA", "Translated Author", Some("Translated author");
    Title => "TI", "Title", Some("Article title");
    TranslatedTitle => "TT", "Translated Title", Some("Translated title");
    User1 => "U1", "User definable 1. This is an alphanumeric field and there is no practical limit to the length of this field.", Some("User definable 1");
    User2 => "U2", "User definable 2. This is an alphanumeric field and there is no practical limit to the length of this field.", Some("User definable 2");
    User3 => "U3", "User definable 3. This is an alphanumeric field and there is no practical limit to the length of this field.", Some("User definable 3");
    User4 => "U4", "User definable 4. This is an alphanumeric field and there is no practical limit to the length of this field.", Some("User definable 4");
    User5 => "U5", "User definable 5. This is an alphanumeric field and there is no practical limit to the length of this field.", Some("User definable 5");
    Url => "UR", "URL", Some("URL");
    Volume => "VL", "Volume number", Some("Volume number");
    PublishedStandardNumber => "VO", "Published Standard number", Some("Published standard number");
    DatePrimary => "Y1", "Primary Date", Some("Primary date");
    DateAccess => "Y2", "Access Date", Some("Access date");
    EndOfReference => "ER", "End of Reference (must be empty and the last tag)", None;
}

impl RisTag {
    /// Check if this tag represents an author field.
    pub fn is_author_tag(&self) -> bool {
        matches!(
            self,
            RisTag::Author
                | RisTag::AuthorPrimary
                | RisTag::AuthorSecondary
                | RisTag::AuthorTertiary
                | RisTag::AuthorSubsidiary
        )
    }
}

macro_rules! reference_types {
    ($($variant:ident => $code:literal, $label:literal;)*) => {
        /// Reference type codes carried by the `TY` tag.
        #[non_exhaustive]
        #[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
        pub enum ReferenceType {
            $(
                #[doc = concat!($code, " - ", $label)]
                $variant,
            )*
        }

        impl ReferenceType {
            /// Look up a type code such as `JOUR`.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(ReferenceType::$variant),)*
                    _ => None,
                }
            }

            /// The RIS type code.
            pub fn code(self) -> &'static str {
                match self {
                    $(ReferenceType::$variant => $code,)*
                }
            }

            /// Human readable label, e.g. `Journal` for `JOUR`.
            pub fn label(self) -> &'static str {
                match self {
                    $(ReferenceType::$variant => $label,)*
                }
            }
        }
    };
}

reference_types! {
    Abstract => "ABST", "Abstract";
    AudiovisualMaterial => "ADVS", "Audiovisual material";
    AggregatedDatabase => "AGGR", "Aggregated Database";
    AncientText => "ANCIENT", "Ancient Text";
    ArtWork => "ART", "Art Work";
    Bill => "BILL", "Bill";
    Blog => "BLOG", "Blog";
    WholeBook => "BOOK", "Whole book";
    Case => "CASE", "Case";
    BookChapter => "CHAP", "Book chapter";
    Chart => "CHART", "Chart";
    ClassicalWork => "CLSWK", "Classical Work";
    ComputerProgram => "COMP", "Computer program";
    ConferenceProceeding => "CONF", "Conference proceeding";
    ConferencePaper => "CPAPER", "Conference paper";
    Catalog => "CTLG", "Catalog";
    DataFile => "DATA", "Data file";
    OnlineDatabase => "DBASE", "Online Database";
    Dictionary => "DICT", "Dictionary";
    ElectronicBook => "EBOOK", "Electronic Book";
    ElectronicBookSection => "ECHAP", "Electronic Book Section";
    EditedBook => "EDBOOK", "Edited Book";
    ElectronicArticle => "EJOUR", "Electronic Article";
    WebPage => "WEB", "Web Page";
    Encyclopedia => "ENCYC", "Encyclopedia";
    Equation => "EQUA", "Equation";
    Figure => "FIGURE", "Figure";
    Generic => "GEN", "Generic";
    GovernmentDocument => "GOVDOC", "Government Document";
    Grant => "GRANT", "Grant";
    Hearing => "HEAR", "Hearing";
    InternetCommunication => "ICOMM", "Internet Communication";
    InPress => "INPR", "In Press";
    JournalFull => "JFULL", "Journal (full)";
    Journal => "JOUR", "Journal";
    LegalRule => "LEGAL", "Legal Rule or Regulation";
    Manuscript => "MANSCPT", "Manuscript";
    Map => "MAP", "Map";
    MagazineArticle => "MGZN", "Magazine article";
    MotionPicture => "MPCT", "Motion picture";
    OnlineMultimedia => "MULTI", "Online Multimedia";
    MusicScore => "MUSIC", "Music score";
    Newspaper => "NEWS", "Newspaper";
    Pamphlet => "PAMP", "Pamphlet";
    Patent => "PAT", "Patent";
    PersonalCommunication => "PCOMM", "Personal communication";
    Report => "RPRT", "Report";
    SerialPublication => "SER", "Serial publication";
    Slide => "SLIDE", "Slide";
    SoundRecording => "SOUND", "Sound recording";
    Standard => "STAND", "Standard";
    Statute => "STAT", "Statute";
    Thesis => "THES", "Thesis/Dissertation";
    UnenactedBill => "UNBILL", "Unenacted Bill";
    UnpublishedWork => "UNPB", "Unpublished work";
    VideoRecording => "VIDEO", "Video recording";
}

impl ReferenceType {
    /// Book-like types rendered with publisher and publishing place.
    pub fn is_book_like(self) -> bool {
        matches!(
            self,
            ReferenceType::WholeBook
                | ReferenceType::BookChapter
                | ReferenceType::ElectronicBook
                | ReferenceType::ElectronicBookSection
                | ReferenceType::EditedBook
        )
    }

    /// Article types whose citation ends with the bare start page.
    pub fn is_journal_like(self) -> bool {
        matches!(
            self,
            ReferenceType::Journal | ReferenceType::JournalFull | ReferenceType::ElectronicArticle
        )
    }
}

/// Long description of a tag code, `None` for unknown tags.
pub fn long_description(tag: &str) -> Option<&'static str> {
    RisTag::from_tag(tag).long_description()
}

/// Short description of a tag code, `None` for unknown tags and `ER`.
pub fn short_description(tag: &str) -> Option<&'static str> {
    RisTag::from_tag(tag).short_description()
}

/// Human label of a reference type code, `None` for unknown codes.
pub fn type_label(code: &str) -> Option<&'static str> {
    ReferenceType::from_code(code).map(ReferenceType::label)
}
