use chrono::NaiveDate;

use super::{StreakSeed, StreakTrack};
use crate::calendar::CalendarSeed;
use crate::contest::Department;
use crate::goal::SavingsGoal;
use crate::quest::{DailyTask, TaskSource};
use crate::shared::DateRange;
use crate::store::{Product, ProductCategory};

const RED_DATES: [(i32, u32, u32); 3] = [(2026, 1, 15), (2026, 1, 23), (2026, 2, 10)];

const AUTOMATION_DATES: [(i32, u32, u32); 20] = [
    (2026, 1, 6),
    (2026, 1, 8),
    (2026, 1, 9),
    (2026, 1, 13),
    (2026, 1, 14),
    (2026, 1, 20),
    (2026, 1, 21),
    (2026, 1, 27),
    (2026, 1, 28),
    (2026, 1, 29),
    (2026, 2, 9),
    (2026, 2, 10),
    (2026, 2, 11),
    (2026, 2, 16),
    (2026, 2, 18),
    (2026, 2, 20),
    (2026, 2, 23),
    (2026, 2, 24),
    (2026, 2, 25),
    (2026, 2, 26),
];

const DISCIPLINE_LADDER: [(u32, u32); 3] = [(7, 20), (30, 100), (90, 500)];
const AUTOMATION_LADDER: [(u32, u32); 3] = [(5, 15), (14, 50), (30, 200)];
const REVIT_LADDER: [(u32, u32); 3] = [(7, 10), (30, 50), (90, 500)];

const BALANCE: u32 = 3450;

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    DateRange::new(ymd(start), ymd(end)).expect("seed ranges are ordered")
}

fn catalog() -> Vec<Product> {
    use ProductCategory::{Food, Fun, Merch, Upgrade};

    let items: [(&str, u32, ProductCategory, &str); 26] = [
        ("Вторая жизнь — аннуляция нарушения и сохранение стрика", 500, Fun, "Защита стрика"),
        ("Именная табличка на дверь/стол", 500, Fun, "Доступно"),
        ("Переходящий кубок / тотем на стол", 800, Fun, "Фан"),
        ("VIP-парковка на 1 месяц", 2000, Fun, "Привилегия"),
        ("Начальник на подхвате (15 мин)", 2500, Fun, "Эксклюзив"),
        ("Кофе от Григория", 3000, Fun, "Эксклюзив"),
        ("Доставка кофе из кофейни", 250, Food, "Доступно"),
        ("Завтрак на столе (круассан и сок)", 300, Food, "Доступно"),
        ("Оплата такси (разовая поездка)", 400, Food, "Транспорт"),
        ("Доставка бизнес-ланча", 400, Food, "Популярное"),
        ("Пицца на отдел", 1200, Food, "Популярное"),
        ("Суши-сет на команду", 1800, Food, "Для команды"),
        ("Сертификат (Ozon / Золотое Яблоко / Steam, 50 BYN)", 500, Merch, "Доступно"),
        ("Подписка (Telegram Premium / Яндекс.Плюс / ChatGPT Plus, 3 мес.)", 750, Merch, "Подписка"),
        ("Премиальная термокружка (Yeti/Kambukka)", 2200, Merch, "Мерч"),
        ("Фирменное худи", 2500, Merch, "Мерч"),
        ("Городской рюкзак (Thule/XD Design)", 6000, Merch, "Премиум"),
        ("Оплата профильного обучения/курса", 5000, Merch, "Развитие"),
        ("Большой премиальный коврик на стол", 1500, Upgrade, "Апгрейд"),
        ("Лампа на монитор (скринбар)", 2500, Upgrade, "Апгрейд"),
        ("Эргономичная подставка для ног", 3000, Upgrade, "Апгрейд"),
        ("Вертикальная мышь (эргономичная)", 4000, Upgrade, "Апгрейд"),
        ("Мышь Logitech MX Master 3S", 6000, Upgrade, "Апгрейд"),
        ("Механическая клавиатура (Keychron/Logitech)", 6500, Upgrade, "Апгрейд"),
        ("Ортопедическое или геймерское кресло", 15000, Upgrade, "Премиум"),
        ("Настольная игра для команды", 1800, Fun, "Для команды"),
    ];

    items
        .into_iter()
        .zip(0u32..)
        .map(|((name, price, category, tag), id)| Product::new(id, name, price, category, tag))
        .collect()
}

fn departments() -> Vec<Department> {
    vec![
        Department::new("Архитектурный отдел", "АО", "#e91e63", (11, 12), 92, 88),
        Department::new("Конструктивный отдел", "КО", "#2196f3", (7, 9), 78, 94).current(),
        Department::new("Инженерный отдел (ОВиК)", "ОВиК", "#ff9800", (5, 8), 63, 81),
        Department::new("Электротехнический отдел", "ЭО", "#9c27b0", (4, 7), 57, 75),
        Department::new("BIM-отдел", "BIM", "#00bcd4", (3, 6), 50, 83),
    ]
}

fn daily_tasks() -> Vec<DailyTask> {
    vec![
        DailyTask {
            id: 1,
            title: "Внесите тайм-трекинг за сегодня".to_string(),
            description: "Норма при ставке 1.0: от 6 до 10 часов. Срок — до 23:59".to_string(),
            reward: 1,
            icon: "⏱️".to_string(),
            progress: 6,
            total: 8,
            completed: false,
            source: TaskSource::Worksection,
        },
        DailyTask {
            id: 3,
            title: "Обновите динамику задач".to_string(),
            description: "Задачи уровня 3 — прогресс раз в 7 дней, разделы — раз в 14 дней"
                .to_string(),
            reward: 2,
            icon: "📈".to_string(),
            progress: 0,
            total: 1,
            completed: false,
            source: TaskSource::Worksection,
        },
    ]
}

impl Default for StreakSeed {
    /// First quarter of 2026 as seen on 2026-02-26.
    fn default() -> Self {
        let calendar = CalendarSeed::new(range((2026, 1, 1), (2026, 3, 31)), ymd((2026, 2, 26)))
            .with_red_dates(RED_DATES.into_iter().map(ymd))
            .with_frozen_range(range((2026, 2, 2), (2026, 2, 6)))
            .with_automation_dates(AUTOMATION_DATES.into_iter().map(ymd));

        Self {
            calendar,
            discipline: StreakTrack::from_ladder(12, &DISCIPLINE_LADDER),
            automation: StreakTrack::from_ladder(8, &AUTOMATION_LADDER),
            revit: StreakTrack::from_ladder(12, &REVIT_LADDER),
            goal: SavingsGoal::new("Мышка Logitech MX Master 3S", 6000, BALANCE),
            balance: BALANCE,
            products: catalog(),
            departments: departments(),
            daily_tasks: daily_tasks(),
        }
    }
}
