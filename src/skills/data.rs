use lazy_static::lazy_static;

use crate::skills::model::{CastTime, CharacterClass, Element, Skill, SkillEffect, SkillType};

lazy_static! {
    /// Built-in skill fixtures served when no database is configured.
    pub static ref FALLBACK_SKILLS: Vec<Skill> = vec![
        Skill {
            id: Some("1".into()),
            name: "강철의 일격".into(),
            class: CharacterClass::Swordmaster,
            level: 45.0,
            skill_type: SkillType::Attack,
            usage_type: "액티브".into(),
            element: None,
            cooldown: 8.0,
            mp_cost: 45.0,
            range: 5.0,
            cast_time: CastTime::Label("즉시 시전".into()),
            description: "전방의 적에게 강철 같은 일격을 가합니다.".into(),
            groggy_gauge: Some(120.0),
            max_charge: None,
            tags: Some(vec!["근접".into(), "단일".into()]),
            target: Some("적".into()),
            specialization: None,
            effects: Some(vec![SkillEffect {
                effect_type: "damage".into(),
                value: 420.0,
                duration: None,
                description: "물리 피해".into(),
            }]),
            icon: None,
        },
        Skill {
            id: Some("2".into()),
            name: "수호의 방패".into(),
            class: CharacterClass::Guardian,
            level: 40.0,
            skill_type: SkillType::Defense,
            usage_type: "액티브".into(),
            element: None,
            cooldown: 30.0,
            mp_cost: 60.0,
            range: 0.0,
            cast_time: CastTime::Label("즉시 시전".into()),
            description: "받는 피해를 40% 감소시키는 방패막을 펼칩니다.".into(),
            groggy_gauge: None,
            max_charge: None,
            tags: Some(vec!["생존".into()]),
            target: Some("자신".into()),
            specialization: None,
            effects: Some(vec![SkillEffect {
                effect_type: "shield".into(),
                value: 40.0,
                duration: Some(8.0),
                description: "피해 감소".into(),
            }]),
            icon: None,
        },
        Skill {
            id: Some("3".into()),
            name: "그림자 습격".into(),
            class: CharacterClass::Assassin,
            level: 50.0,
            skill_type: SkillType::Attack,
            usage_type: "액티브".into(),
            element: Some(Element::Dark),
            cooldown: 15.0,
            mp_cost: 70.0,
            range: 12.0,
            cast_time: CastTime::Label("즉시 시전".into()),
            description: "그림자를 타고 적의 배후로 이동해 급습합니다.".into(),
            groggy_gauge: Some(80.0),
            max_charge: None,
            tags: Some(vec!["은신".into(), "이동".into()]),
            target: Some("적".into()),
            specialization: Some(vec!["배후 피해 증가".into()]),
            effects: None,
            icon: None,
        },
        Skill {
            id: Some("4".into()),
            name: "관통의 화살".into(),
            class: CharacterClass::Ranger,
            level: 50.0,
            skill_type: SkillType::Attack,
            usage_type: "액티브".into(),
            element: None,
            cooldown: 12.0,
            mp_cost: 55.0,
            range: 25.0,
            cast_time: CastTime::Seconds(1.5),
            description: "일직선상의 모든 적을 관통하는 화살을 날립니다.".into(),
            groggy_gauge: None,
            max_charge: Some(3.0),
            tags: Some(vec!["관통".into(), "차지".into()]),
            target: Some("적".into()),
            specialization: None,
            effects: None,
            icon: None,
        },
        Skill {
            id: Some("5".into()),
            name: "화염 폭풍".into(),
            class: CharacterClass::Sorcerer,
            level: 55.0,
            skill_type: SkillType::Attack,
            usage_type: "액티브".into(),
            element: Some(Element::Fire),
            cooldown: 25.0,
            mp_cost: 150.0,
            range: 20.0,
            cast_time: CastTime::Seconds(2.5),
            description: "지정한 지역에 화염 폭풍을 일으켜 지속 피해를 줍니다.".into(),
            groggy_gauge: None,
            max_charge: None,
            tags: Some(vec!["광역".into(), "화상".into()]),
            target: Some("지역".into()),
            specialization: Some(vec!["폭풍 확산".into(), "잔염".into()]),
            effects: Some(vec![
                SkillEffect {
                    effect_type: "damage".into(),
                    value: 680.0,
                    duration: None,
                    description: "화염 피해".into(),
                },
                SkillEffect {
                    effect_type: "burn".into(),
                    value: 120.0,
                    duration: Some(8.0),
                    description: "지속 화상 피해".into(),
                },
            ]),
            icon: None,
        },
        Skill {
            id: Some("6".into()),
            name: "정령 소환".into(),
            class: CharacterClass::Elementalist,
            level: 30.0,
            skill_type: SkillType::Summon,
            usage_type: "액티브".into(),
            element: Some(Element::Water),
            cooldown: 60.0,
            mp_cost: 200.0,
            range: 3.0,
            cast_time: CastTime::Seconds(3.0),
            description: "물의 정령을 소환해 함께 싸웁니다.".into(),
            groggy_gauge: None,
            max_charge: None,
            tags: None,
            target: None,
            specialization: None,
            effects: None,
            icon: None,
        },
        Skill {
            id: Some("7".into()),
            name: "승리의 찬가".into(),
            class: CharacterClass::Chanter,
            level: 40.0,
            skill_type: SkillType::Buff,
            usage_type: "패시브".into(),
            element: None,
            cooldown: 0.0,
            mp_cost: 0.0,
            range: 15.0,
            cast_time: CastTime::Label("즉시 시전".into()),
            description: "주변 아군의 공격력을 올리는 찬가를 유지합니다.".into(),
            groggy_gauge: None,
            max_charge: None,
            tags: Some(vec!["파티".into()]),
            target: Some("아군".into()),
            specialization: None,
            effects: Some(vec![SkillEffect {
                effect_type: "attack_up".into(),
                value: 12.0,
                duration: None,
                description: "공격력 증가".into(),
            }]),
            icon: None,
        },
        Skill {
            id: Some("8".into()),
            name: "생명의 은총".into(),
            class: CharacterClass::Cleric,
            level: 45.0,
            skill_type: SkillType::Recovery,
            usage_type: "액티브".into(),
            element: Some(Element::Holy),
            cooldown: 10.0,
            mp_cost: 110.0,
            range: 20.0,
            cast_time: CastTime::Seconds(2.0),
            description: "대상의 생명력을 크게 회복시킵니다.".into(),
            groggy_gauge: None,
            max_charge: None,
            tags: Some(vec!["회복".into(), "단일".into()]),
            target: Some("아군".into()),
            specialization: None,
            effects: Some(vec![SkillEffect {
                effect_type: "heal".into(),
                value: 1500.0,
                duration: None,
                description: "생명력 회복".into(),
            }]),
            icon: None,
        },
    ];
}
