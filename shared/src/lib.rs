use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business name printed on the header, the welcome screen and every credential
pub const BUSINESS_NAME: &str = "La Barberie de los Perritos";

/// Services line printed under the business name
pub const BUSINESS_TAGLINE: &str = "Peluquería Canina Profesional • Adiestramiento • Ludoteca";

/// Language used for every user-visible string produced by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Spanish, the language the shop works in
    #[default]
    Es,
    En,
}

impl Locale {
    /// Breed badge shown when the owner left the breed empty
    pub fn mixed_breed_label(self) -> &'static str {
        match self {
            Locale::Es => "Mestizo",
            Locale::En => "Mixed breed",
        }
    }

    /// Label that replaces the day list when many days are selected
    pub fn many_days_label(self) -> &'static str {
        match self {
            Locale::Es => "Días de semana",
            Locale::En => "Weekdays",
        }
    }

    /// Placeholder for empty age/weight stats on the credential
    pub fn empty_stat_placeholder(self) -> &'static str {
        "-"
    }

    /// Single blocking message shown when a submission is missing required fields
    pub fn missing_fields_message(self) -> &'static str {
        match self {
            Locale::Es => "Por favor completa los campos requeridos: Foto, Nombre, Dueño, Teléfono y Disponibilidad (Días y Horarios).",
            Locale::En => "Please complete the required fields: Photo, Name, Owner, Phone and Availability (Days and Times).",
        }
    }

    /// Shown when the credential could not be turned into an image
    pub fn export_failed_message(self) -> &'static str {
        match self {
            Locale::Es => "Hubo un error al generar la imagen. Por favor intenta hacer una captura de pantalla.",
            Locale::En => "There was an error generating the image. Please try taking a screenshot instead.",
        }
    }

    /// Assistant reply used when the text service answers with no text
    pub fn empty_reply_fallback(self) -> &'static str {
        match self {
            Locale::Es => "¡Guau! Lo siento, tuve un pequeño problema entendiendo eso. 🐾",
            Locale::En => "Woof! Sorry, I had a little trouble understanding that. 🐾",
        }
    }

    /// Assistant reply used when the text service cannot be reached
    pub fn connection_error_fallback(self) -> &'static str {
        match self {
            Locale::Es => "Ocurrió un error de conexión. Por favor intenta crear la ID directamente.",
            Locale::En => "A connection error occurred. Please try creating the ID directly.",
        }
    }

    /// Prefix for the creation timestamp in the credential footer
    pub fn created_at_caption(self) -> &'static str {
        match self {
            Locale::Es => "ID Creado",
            Locale::En => "ID Created",
        }
    }
}

/// Error returned when a select/option value does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} option: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownOption {}

// Matches a stable key or either locale's label, ignoring case and surrounding whitespace.
fn parse_option<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    key: fn(T) -> &'static str,
    label: fn(T, Locale) -> &'static str,
) -> Result<T, UnknownOption> {
    let wanted = value.trim().to_lowercase();
    all.iter()
        .copied()
        .find(|option| {
            key(*option).to_lowercase() == wanted
                || label(*option, Locale::Es).to_lowercase() == wanted
                || label(*option, Locale::En).to_lowercase() == wanted
        })
        .ok_or_else(|| UnknownOption {
            kind,
            value: value.to_string(),
        })
}

/// Day of the week offered in the availability picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Picker order, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Weekday::Monday, Locale::Es) => "Lunes",
            (Weekday::Tuesday, Locale::Es) => "Martes",
            (Weekday::Wednesday, Locale::Es) => "Miércoles",
            (Weekday::Thursday, Locale::Es) => "Jueves",
            (Weekday::Friday, Locale::Es) => "Viernes",
            (Weekday::Saturday, Locale::Es) => "Sábado",
            (Weekday::Sunday, Locale::Es) => "Domingo",
            (Weekday::Monday, Locale::En) => "Monday",
            (Weekday::Tuesday, Locale::En) => "Tuesday",
            (Weekday::Wednesday, Locale::En) => "Wednesday",
            (Weekday::Thursday, Locale::En) => "Thursday",
            (Weekday::Friday, Locale::En) => "Friday",
            (Weekday::Saturday, Locale::En) => "Saturday",
            (Weekday::Sunday, Locale::En) => "Sunday",
        }
    }

    /// First three characters of the localized label (Lunes -> Lun)
    pub fn abbreviation(self, locale: Locale) -> String {
        self.label(locale).chars().take(3).collect()
    }
}

impl FromStr for Weekday {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("day", s, &Weekday::ALL, Weekday::key, Weekday::label)
    }
}

/// Named day selections that replace the whole day set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPreset {
    Weekdays,
    Weekend,
}

impl DayPreset {
    pub const ALL: [DayPreset; 2] = [DayPreset::Weekdays, DayPreset::Weekend];

    pub fn days(self) -> &'static [Weekday] {
        match self {
            DayPreset::Weekdays => &Weekday::ALL[..5],
            DayPreset::Weekend => &Weekday::ALL[5..],
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (DayPreset::Weekdays, Locale::Es) => "Días de semana",
            (DayPreset::Weekend, Locale::Es) => "Fines de semana",
            (DayPreset::Weekdays, Locale::En) => "Weekdays",
            (DayPreset::Weekend, Locale::En) => "Weekend",
        }
    }
}

/// Preferred time of day for appointments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Midday,
    Afternoon,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Midday, TimeSlot::Afternoon];

    pub fn key(self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Midday => "midday",
            TimeSlot::Afternoon => "afternoon",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (TimeSlot::Morning, Locale::Es) => "Por la mañana",
            (TimeSlot::Midday, Locale::Es) => "Mediodía",
            (TimeSlot::Afternoon, Locale::Es) => "Por la tarde",
            (TimeSlot::Morning, Locale::En) => "Morning",
            (TimeSlot::Midday, Locale::En) => "Midday",
            (TimeSlot::Afternoon, Locale::En) => "Afternoon",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("time slot", s, &TimeSlot::ALL, TimeSlot::key, TimeSlot::label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HairType {
    #[default]
    Short,
    Long,
    Curly,
    Wire,
    DoubleCoat,
}

impl HairType {
    pub const ALL: [HairType; 5] = [
        HairType::Short,
        HairType::Long,
        HairType::Curly,
        HairType::Wire,
        HairType::DoubleCoat,
    ];

    pub fn key(self) -> &'static str {
        match self {
            HairType::Short => "short",
            HairType::Long => "long",
            HairType::Curly => "curly",
            HairType::Wire => "wire",
            HairType::DoubleCoat => "double-coat",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (HairType::Short, Locale::Es) => "Corto",
            (HairType::Long, Locale::Es) => "Largo",
            (HairType::Curly, Locale::Es) => "Rizado",
            (HairType::Wire, Locale::Es) => "Duro / Alambre",
            (HairType::DoubleCoat, Locale::Es) => "Doble Capa",
            (HairType::Short, Locale::En) => "Short",
            (HairType::Long, Locale::En) => "Long",
            (HairType::Curly, Locale::En) => "Curly",
            (HairType::Wire, Locale::En) => "Wire",
            (HairType::DoubleCoat, Locale::En) => "Double coat",
        }
    }
}

impl FromStr for HairType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("hair type", s, &HairType::ALL, HairType::key, HairType::label)
    }
}

/// Service the owner is booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    Bath,
    BathAndCut,
    Training,
    HolisticTherapy,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Bath,
        ServiceType::BathAndCut,
        ServiceType::Training,
        ServiceType::HolisticTherapy,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ServiceType::Bath => "bath",
            ServiceType::BathAndCut => "bath-and-cut",
            ServiceType::Training => "training",
            ServiceType::HolisticTherapy => "holistic-therapy",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ServiceType::Bath, Locale::Es) => "Baño",
            (ServiceType::BathAndCut, Locale::Es) => "Baño y Corte",
            (ServiceType::Training, Locale::Es) => "Adiestramiento",
            (ServiceType::HolisticTherapy, Locale::Es) => "Terapias Holísticas",
            (ServiceType::Bath, Locale::En) => "Bath",
            (ServiceType::BathAndCut, Locale::En) => "Bath + Cut",
            (ServiceType::Training, Locale::En) => "Training",
            (ServiceType::HolisticTherapy, Locale::En) => "Holistic Therapy",
        }
    }
}

impl FromStr for ServiceType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("service", s, &ServiceType::ALL, ServiceType::key, ServiceType::label)
    }
}

/// Error for photo payloads that are not embedded `data:` URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPhoto(pub String);

impl fmt::Display for InvalidPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "photo must be an embedded data URL: {}", self.0)
    }
}

impl std::error::Error for InvalidPhoto {}

/// Pet photo held inline as a `data:` URL, never as a link to somewhere else
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoData(String);

impl PhotoData {
    pub fn from_data_url(data_url: impl Into<String>) -> Result<Self, InvalidPhoto> {
        let data_url = data_url.into();
        if !data_url.starts_with("data:") || !data_url.contains(',') {
            let preview: String = data_url.chars().take(32).collect();
            return Err(InvalidPhoto(preview));
        }
        Ok(Self(data_url))
    }

    pub fn as_data_url(&self) -> &str {
        &self.0
    }

    /// Media type declared in the URL header, e.g. `image/png`
    pub fn mime_type(&self) -> &str {
        self.0["data:".len()..]
            .split([';', ','])
            .next()
            .unwrap_or_default()
    }
}

// Photos are large; keep debug output readable.
impl fmt::Debug for PhotoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhotoData({}, {} bytes)", self.mime_type(), self.0.len())
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Role name the text-generation service expects in history turns
    pub fn wire_role(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "model",
        }
    }
}

/// One entry in the chat widget transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Stable key for list rendering
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }
}

/// Prior conversation turn in the shape the text-generation service expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: String,
    pub parts: Vec<HistoryPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPart {
    pub text: String,
}

impl From<&ChatMessage> for HistoryTurn {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.wire_role().to_string(),
            parts: vec![HistoryPart {
                text: message.text.clone(),
            }],
        }
    }
}

/// Required field that blocked a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingField {
    Photo,
    DogName,
    OwnerName,
    Phone,
    Days,
    TimeSlots,
}

/// Groups reported to the user when a submission is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredGroup {
    Photo,
    Identity,
    Availability,
}

impl MissingField {
    pub fn group(self) -> RequiredGroup {
        match self {
            MissingField::Photo => RequiredGroup::Photo,
            MissingField::DogName | MissingField::OwnerName | MissingField::Phone => {
                RequiredGroup::Identity
            }
            MissingField::Days | MissingField::TimeSlots => RequiredGroup::Availability,
        }
    }
}

/// Result of checking a draft against the required-field rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileValidation {
    pub is_valid: bool,
    pub missing: Vec<MissingField>,
}

impl ProfileValidation {
    pub fn from_missing(missing: Vec<MissingField>) -> Self {
        Self {
            is_valid: missing.is_empty(),
            missing,
        }
    }

    /// Missing groups in reporting order (photo, identity, availability), without repeats
    pub fn groups(&self) -> Vec<RequiredGroup> {
        let mut groups: Vec<RequiredGroup> = Vec::new();
        for field in &self.missing {
            let group = field.group();
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups.sort_by_key(|group| match group {
            RequiredGroup::Photo => 0,
            RequiredGroup::Identity => 1,
            RequiredGroup::Availability => 2,
        });
        groups
    }
}

/// Settings for the chat assistant and its text-generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// `None` makes every call fall back to the connection-error reply
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub system_instruction: String,
    /// Sent with an empty history when the widget mounts
    pub greeting_trigger: String,
}

impl AssistantConfig {
    /// Reads the API key baked in at compile time (`GEMINI_API_KEY`, then `API_KEY`)
    pub fn from_build_env() -> Self {
        let api_key = option_env!("GEMINI_API_KEY")
            .or(option_env!("API_KEY"))
            .map(str::to_string)
            .filter(|key| !key.trim().is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            system_instruction: concat!(
                "Eres un asistente virtual amable y entusiasta para una \"Barbería Canina\" (peluquería de perros).\n",
                "Tu objetivo es dar la bienvenida a nuevos clientes y animarlos a crear una \"Credencial de Mascota\" (ID) para facilitar su registro y turnos.\n",
                "1. Saluda cordialmente.\n",
                "2. Explica brevemente que crear la ID ayuda a organizar los turnos, conocer mejor a la mascota y que obtendrán una tarjeta digital bonita para descargar.\n",
                "3. Si el usuario pregunta por precios, di que varían según el tamaño y tipo de pelo, pero que con la Credencial será más fácil cotizar.\n",
                "4. Mantén las respuestas cortas, dulces y usa emojis de perros o huellas 🐾.\n",
            )
            .to_string(),
            greeting_trigger: "Hola, soy un nuevo cliente.".to_string(),
        }
    }
}

/// Options handed to the rasterizer, serialized in its own option names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterizeOptions {
    pub scale: f64,
    /// `None` keeps the background transparent
    #[serde(rename = "backgroundColor")]
    pub background_color: Option<String>,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
}

impl Default for RasterizeOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background_color: None,
            use_cors: true,
        }
    }
}

/// Settings for turning the credential into a downloadable image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub rasterize: RasterizeOptions,
    pub file_prefix: String,
    pub file_extension: String,
    /// How long the "saved" state stays on the download button
    pub success_display_ms: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            rasterize: RasterizeOptions::default(),
            file_prefix: "Credencial_".to_string(),
            file_extension: "png".to_string(),
            success_display_ms: 3000,
        }
    }
}

/// Top-level application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub locale: Locale,
    /// Minimum level forwarded to the browser console (error, warn, info, debug, trace)
    pub log_level: String,
    pub assistant: AssistantConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self {
            assistant: AssistantConfig::from_build_env(),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Es,
            log_level: "info".to_string(),
            assistant: AssistantConfig::default(),
            export: ExportConfig::default(),
        }
    }
}
