//! Copy and option lists for the page. Everything a marketer would tweak lives here.

use crate::quiz::flow::Question;

pub const BRAND: &str = "TraffAgent";

pub static QUIZ_QUESTIONS: &[Question] = &[
    Question {
        key: "budget",
        prompt: "Какой месячный бюджет на рекламу?",
        options: &["до $1k", "$1k-$5k", "$5k-$20k", "$20k+"],
    },
    Question {
        key: "niche",
        prompt: "В какой нише ваш продукт?",
        options: &["E-com", "SaaS", "EdTech", "Mobile", "Финтех", "Другое"],
    },
    Question {
        key: "geo",
        prompt: "Где ваши клиенты?",
        options: &["СНГ", "Европа", "США", "Весь мир"],
    },
];

pub const TRAFFIC_SOURCES: &[&str] = &[
    "Meta",
    "Google",
    "TikTok",
    "YouTube",
    "LinkedIn",
    "Telegram Ads",
    "Yandex",
    "Native",
    "Push",
    "In-App",
];

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Услуги"),
    ("#inside", "Внутри"),
    ("#cases", "Кейсы"),
    ("#pricing", "Тарифы"),
    ("#faq", "FAQ"),
];

pub const METRICS: &[(&str, &str)] = &[
    ("3.7x", "средний ROAS"),
    ("120k+", "лидов за 12 мес."),
    ("350+", "креативов протестировано"),
    ("18", "источников трафика"),
];

pub struct ServiceGroup {
    pub title: &'static str,
    pub desc: &'static str,
    pub bullets: &'static [&'static str],
}

pub const SERVICES: &[ServiceGroup] = &[
    ServiceGroup {
        title: "Медиабаинг + Комплаенс",
        desc: "Meta, Google, TikTok, альтернативы. Anti-ban, прогрев, резервы.",
        bullets: &["Гипотезы и тесты", "Масштабирование", "Кейсы по вайт/грей"],
    },
    ServiceGroup {
        title: "Креативы + Продакшн",
        desc: "UGC, статик, видео. Быстрые пачки и итерации.",
        bullets: &["Сториборды", "Сплиты и вариации", "CTR/CR рост"],
    },
    ServiceGroup {
        title: "Воронки + Автоматизация",
        desc: "Квизы, чат-боты, CRM. Правила и скрипты для оптимизаций.",
        bullets: &["Квизы и LP", "Боты и ретеншн", "Правила/скрипты"],
    },
    ServiceGroup {
        title: "Аналитика + Отчетность",
        desc: "Серверный трекинг, событийная модель, сводка в BI.",
        bullets: &["Сквозная аналитика", "Дашборды", "KPI weekly"],
    },
];

pub const STEPS: &[(&str, &str)] = &[
    ("Discovery", "Погружаемся в продукт, аудиторию и цели. KPI и рамки."),
    ("Стратегия", "Каналы, воронки, креативы, бюджет по спринтам."),
    ("Продакшн", "Креативы, лендинги/квизы, трекинг и CRM."),
    ("Запуск", "Закупка трафика, быстрые итерации, анти-бан."),
    ("Рост", "Оптимизация по LTV/ROAS, автоматизация, масштаб."),
];

pub const CASES: &[(&str, &str, &str)] = &[
    ("FinTech SaaS", "+212% MRR", "Google + LinkedIn + контент"),
    ("eCom здоровье", "ROAS 4.1", "TikTok UGC + квиз"),
    ("EdTech mobile", "CPI -37%", "Meta + пачки креативов"),
];

#[derive(PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub desc: &'static str,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Старт",
        price: "от $1k",
        desc: "Для тестов и первых продаж",
        features: &["Стратегия", "3-5 подходов", "1-2 канала", "Еженед. отчет"],
        highlight: false,
    },
    Plan {
        name: "Рост",
        price: "% от спенда + $5k",
        desc: "Для стабильного масштабирования",
        features: &["Пачки креативов", "Мультиканальный баинг", "Сквозная аналитика", "Автоматизация"],
        highlight: true,
    },
    Plan {
        name: "Скейл",
        price: "кастом",
        desc: "Под высокие бюджеты и KPI",
        features: &["Кастомная команда", "R&D и анти-бан", "Серверный трекинг", "SLA по KPI"],
        highlight: false,
    },
];

pub const FAQ: &[(&str, &str)] = &[
    ("С какими вертикалями работаете?", "E-com, edtech, подписки, mobile, SaaS, финтех."),
    ("Когда ждать результат?", "Первые инсайты за 7–14 дней спринта, масштаб 1–2 месяца."),
    ("Как считаете атрибуцию?", "Серверный трекинг, событийная модель, сводка в BI."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_quiz_keys_are_unique() {
        let keys: HashSet<_> = QUIZ_QUESTIONS.iter().map(|q| q.key).collect();
        assert_eq!(keys.len(), QUIZ_QUESTIONS.len());
    }

    #[test]
    fn test_every_question_is_a_real_choice() {
        for question in QUIZ_QUESTIONS {
            assert!(question.options.len() >= 2, "{} has too few options", question.key);
            let unique: HashSet<_> = question.options.iter().collect();
            assert_eq!(unique.len(), question.options.len());
        }
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.highlight).count(), 1);
    }
}
