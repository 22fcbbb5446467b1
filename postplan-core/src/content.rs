//! Title, body and hashtag synthesis.
//!
//! Templates and phrase pools are the fixed Russian-language product copy.
//! The synthesis functions take `type`/`platform` as open strings so they
//! work on hand-edited records too: an unrecognized type falls back to the
//! generic title and contributes no type hashtags, an unrecognized platform
//! contributes no platform hashtag. Nothing here fails.

use rand::Rng;

use crate::post::{ContentType, Platform, Tone};

const CITIES: [&str; 10] = [
    "Ижевск",
    "Казань",
    "Пермь",
    "Екатеринбург",
    "Уфа",
    "Тюмень",
    "Нижний Новгород",
    "Самара",
    "Санкт-Петербург",
    "Москва",
];

const DISTRICTS: [&str; 6] = [
    "центр",
    "новый город",
    "пригород",
    "спальный район",
    "деловой квартал",
    "район у набережной",
];

/// Attention hooks, used for Advice titles only.
const HOOKS: [&str; 5] = [
    "3 ошибки, из-за которых теряют деньги",
    "Как выбрать без сюрпризов",
    "Что не расскажут в рекламе",
    "Гид для занятых",
    "Только факты",
];

const CTAS: [&str; 4] = [
    "Сохраните пост — пригодится.",
    "Задайте вопрос в ЛС — отвечу сегодня.",
    "Нужен подбор? Напишите «ПОДБОР».",
    "Записать вас на показ?",
];

const BENEFITS: [&str; 5] = [
    "сравнивайте не только цену м², но и расходы после покупки — ремонт, мебель, коммуналка;",
    "смотрите на шум, солнце и двор в разное время суток;",
    "узнавайте план ремонта у застройщика и реальную толщину стен;",
    "просите расчёт ипотеки у 2–3 банков — всегда есть разница;",
    "не стесняйтесь торговаться — аргументы решают.",
];

const ADVICE_LINE: &str = "Мой совет: сначала критерии (район, бюджет, сроки), потом показы.";

const BASE_TAGS: [&str; 6] = [
    "#недвижимость",
    "#квартира",
    "#покупка",
    "#ипотека",
    "#риелтор",
    "#советы",
];

pub(crate) fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// Build a title for the given content type.
///
/// City and both districts are drawn up front, independently; the district
/// comparison may therefore pit a district against itself. Unrecognized
/// types get the generic fallback title.
pub fn title_for(content_type: &str, rng: &mut impl Rng) -> String {
    let city = pick(rng, &CITIES);
    let district_a = pick(rng, &DISTRICTS);
    let district_b = pick(rng, &DISTRICTS);

    match ContentType::parse(content_type) {
        Some(ContentType::Advice) => format!("{} при покупке в {}", pick(rng, &HOOKS), city),
        Some(ContentType::ListingReview) => {
            format!("Обзор: двушка в {}, {} — стоит ли брать?", district_a, city)
        }
        Some(ContentType::DealStory) => "Как мы сбили цену на 350 тыс.: реальный кейс".to_string(),
        Some(ContentType::MarketAnalysis) => {
            format!("{}: что происходит с ценами в этом месяце", city)
        }
        Some(ContentType::BuyerFaq) => {
            "Отвечаю на частый вопрос: что проверить на показе".to_string()
        }
        Some(ContentType::MortgageRates) => {
            "Ипотека без паники: как читать одобрение банка".to_string()
        }
        Some(ContentType::DistrictComparison) => {
            format!("{} vs {}: где жить удобнее в {}?", district_a, district_b, city)
        }
        None => format!("Полезное для покупателей в {}", city),
    }
}

/// Build a post body for the given tone.
///
/// The content type is accepted for signature parity with the other
/// synthesis functions but currently unused: bodies vary only by tone.
/// Benefit tips are drawn independently and may repeat.
pub fn body_for(_content_type: &str, tone: Tone, rng: &mut impl Rng) -> String {
    let tone_line = match tone {
        Tone::Friendly => "Пишу простым языком, без сложных терминов.",
        Tone::LightHumor => "Немного иронии — но по делу.",
        Tone::Expert => "Коротко и по делу, как для занятых людей.",
    };

    [
        tone_line.to_string(),
        format!("Что важно: {} {}", pick(rng, &BENEFITS), pick(rng, &BENEFITS)),
        ADVICE_LINE.to_string(),
        pick(rng, &CTAS).to_string(),
    ]
    .join("\n")
}

/// Build the hashtag line: base tags, then type tags, then the platform tag.
pub fn hashtags_for(content_type: &str, platform: &str) -> String {
    let mut tags: Vec<&str> = BASE_TAGS.to_vec();

    let type_tags: &[&str] = match ContentType::parse(content_type) {
        Some(ContentType::Advice) => &["#лайфхаки", "#чеклист"],
        Some(ContentType::ListingReview) => &["#обзор", "#новостройка", "#вторичка"],
        Some(ContentType::DealStory) => &["#реальныйкейс", "#переговоры"],
        Some(ContentType::MarketAnalysis) => &["#аналитика", "#цены", "#ставки"],
        Some(ContentType::BuyerFaq) => &["#вопросответ", "#faq"],
        Some(ContentType::MortgageRates) => &["#банк", "#процентнаяставка"],
        Some(ContentType::DistrictComparison) => &["#локация", "#район"],
        None => &[],
    };
    tags.extend_from_slice(type_tags);

    match Platform::parse(platform) {
        Some(Platform::Telegram) => tags.push("#телеграм"),
        Some(Platform::Vk) => tags.push("#вконтакте"),
        Some(Platform::Instagram) => tags.push("#instagram"),
        None => {}
    }

    tags.join(" ")
}
