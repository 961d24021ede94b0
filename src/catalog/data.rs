use lazy_static::lazy_static;

use crate::catalog::model::{
    Character, CharacterStats, Guide, Item, ItemGrade, ItemStats, ItemType,
};

lazy_static! {
    pub static ref CHARACTERS: Vec<Character> = vec![
        Character {
            id: "1".into(),
            name: "글라디에이터".into(),
            class: "전사".into(),
            level: 65,
            stats: CharacterStats {
                hp: 15200,
                mp: 3200,
                attack: 1850,
                defense: 1420,
                accuracy: 890,
                evasion: 650,
            },
        },
        Character {
            id: "2".into(),
            name: "템플러".into(),
            class: "전사".into(),
            level: 65,
            stats: CharacterStats {
                hp: 14800,
                mp: 3800,
                attack: 1720,
                defense: 1580,
                accuracy: 850,
                evasion: 620,
            },
        },
        Character {
            id: "3".into(),
            name: "어쌔신".into(),
            class: "도적".into(),
            level: 65,
            stats: CharacterStats {
                hp: 11200,
                mp: 2800,
                attack: 1920,
                defense: 980,
                accuracy: 1120,
                evasion: 1420,
            },
        },
        Character {
            id: "4".into(),
            name: "레인저".into(),
            class: "도적".into(),
            level: 65,
            stats: CharacterStats {
                hp: 10800,
                mp: 3200,
                attack: 1880,
                defense: 920,
                accuracy: 1180,
                evasion: 1380,
            },
        },
        Character {
            id: "5".into(),
            name: "소서러".into(),
            class: "마법사".into(),
            level: 65,
            stats: CharacterStats {
                hp: 9800,
                mp: 5200,
                attack: 1980,
                defense: 780,
                accuracy: 1120,
                evasion: 580,
            },
        },
        Character {
            id: "6".into(),
            name: "스피릿마스터".into(),
            class: "마법사".into(),
            level: 65,
            stats: CharacterStats {
                hp: 10200,
                mp: 4800,
                attack: 1750,
                defense: 850,
                accuracy: 1080,
                evasion: 620,
            },
        },
        Character {
            id: "7".into(),
            name: "클레릭".into(),
            class: "사제".into(),
            level: 65,
            stats: CharacterStats {
                hp: 10800,
                mp: 4800,
                attack: 1420,
                defense: 1020,
                accuracy: 980,
                evasion: 720,
            },
        },
        Character {
            id: "8".into(),
            name: "챈터".into(),
            class: "사제".into(),
            level: 65,
            stats: CharacterStats {
                hp: 11200,
                mp: 4200,
                attack: 1580,
                defense: 1180,
                accuracy: 920,
                evasion: 780,
            },
        },
    ];

    pub static ref ITEMS: Vec<Item> = vec![
        Item {
            id: "1".into(),
            name: "천둥의 검".into(),
            item_type: ItemType::Weapon,
            grade: ItemGrade::Legendary,
            description: "천둥의 힘을 담은 전설의 검. 높은 공격력을 제공합니다.".into(),
            stats: Some(ItemStats {
                attack: Some(285),
                accuracy: Some(120),
                ..Default::default()
            }),
        },
        Item {
            id: "2".into(),
            name: "용의 가죽 갑옷".into(),
            item_type: ItemType::Armor,
            grade: ItemGrade::Epic,
            description: "용의 가죽으로 만든 강력한 방어구.".into(),
            stats: Some(ItemStats {
                defense: Some(195),
                hp: Some(850),
                ..Default::default()
            }),
        },
        Item {
            id: "3".into(),
            name: "마력의 목걸이".into(),
            item_type: ItemType::Accessory,
            grade: ItemGrade::Epic,
            description: "마법 공격력을 크게 향상시키는 액세서리.".into(),
            stats: Some(ItemStats {
                attack: Some(95),
                mp: Some(420),
                ..Default::default()
            }),
        },
        Item {
            id: "4".into(),
            name: "회복 물약".into(),
            item_type: ItemType::Consumable,
            grade: ItemGrade::Common,
            description: "HP를 500 회복시킵니다.".into(),
            stats: Some(ItemStats {
                hp: Some(500),
                ..Default::default()
            }),
        },
        Item {
            id: "5".into(),
            name: "정신력 물약".into(),
            item_type: ItemType::Consumable,
            grade: ItemGrade::Common,
            description: "MP를 300 회복시킵니다.".into(),
            stats: Some(ItemStats {
                mp: Some(300),
                ..Default::default()
            }),
        },
        Item {
            id: "6".into(),
            name: "영웅의 투구".into(),
            item_type: ItemType::Armor,
            grade: ItemGrade::Legendary,
            description: "전설의 영웅이 착용했던 투구. 강력한 방어력을 제공합니다.".into(),
            stats: Some(ItemStats {
                defense: Some(145),
                hp: Some(650),
                accuracy: Some(85),
                ..Default::default()
            }),
        },
        Item {
            id: "7".into(),
            name: "마법 지팡이".into(),
            item_type: ItemType::Weapon,
            grade: ItemGrade::Epic,
            description: "마법사용 지팡이. 마법 공격력이 크게 향상됩니다.".into(),
            stats: Some(ItemStats {
                attack: Some(265),
                mp: Some(380),
                ..Default::default()
            }),
        },
        Item {
            id: "8".into(),
            name: "민첩의 반지".into(),
            item_type: ItemType::Accessory,
            grade: ItemGrade::Rare,
            description: "민첩성을 향상시키는 반지.".into(),
            stats: Some(ItemStats {
                evasion: Some(180),
                accuracy: Some(95),
                ..Default::default()
            }),
        },
        Item {
            id: "9".into(),
            name: "철광석".into(),
            item_type: ItemType::Material,
            grade: ItemGrade::Common,
            description: "장비 제작에 사용되는 기본 재료.".into(),
            stats: None,
        },
        Item {
            id: "10".into(),
            name: "정화의 물약".into(),
            item_type: ItemType::Consumable,
            grade: ItemGrade::Uncommon,
            description: "모든 상태이상을 제거합니다.".into(),
            stats: None,
        },
    ];

    pub static ref GUIDES: Vec<Guide> = vec![
        Guide {
            id: "1".into(),
            title: "초보자 가이드".into(),
            category: "시작하기".into(),
            content: "아이온2를 처음 시작하는 분들을 위한 기본 가이드입니다.".into(),
            thumbnail: "/images/guide-beginner.jpg".into(),
        },
        Guide {
            id: "2".into(),
            title: "직업 선택 가이드".into(),
            category: "캐릭터".into(),
            content: "각 직업의 특징과 추천 직업을 안내합니다.".into(),
            thumbnail: "/images/guide-class.jpg".into(),
        },
        Guide {
            id: "3".into(),
            title: "장비 강화 가이드".into(),
            category: "아이템".into(),
            content: "장비 강화 방법과 최적의 타이밍을 설명합니다.".into(),
            thumbnail: "/images/guide-enhance.jpg".into(),
        },
        Guide {
            id: "4".into(),
            title: "던전 공략 가이드".into(),
            category: "던전".into(),
            content: "주요 던전의 공략 방법과 보상 정보를 제공합니다.".into(),
            thumbnail: "/images/guide-dungeon.jpg".into(),
        },
        Guide {
            id: "5".into(),
            title: "PvP 전투 가이드".into(),
            category: "PvP".into(),
            content: "플레이어 간 전투에서 승리하는 전략을 소개합니다.".into(),
            thumbnail: "/images/guide-pvp.jpg".into(),
        },
    ];
}
