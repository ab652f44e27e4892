// src/seed.rs

use crate::document::{Document, Highlight, IndicatorRow, PerformanceRow};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed native-language (Korean) letter every session starts from.
pub fn seed_document() -> Document {
    Document {
        date: "Tuesday 25 NOV, 2025".into(),
        quarter_title: "2025년 3분기".into(),
        earnings_summary: lines(&[
            "(매출액) YoY -0.7%, QoQ -4.8%",
            "(영업이익) YoY -6.4% QoQ -16.5%",
            "- 경기위축 및 하절기(여름휴가철 등) 계절적 영향으로 인한 물량 감소",
            "(당기순이익) 3,263억원",
            "- 보유 금융자산 주가 상승에 따른 효과",
            "- QoQ MPM 이자비용 절감(약 180억 이상)",
        ]),
        performance_history: vec![
            perf("'24 1Q", 15884.0, 1069.0, 6.7),
            perf("'24 2Q", 17787.0, 1406.0, 7.9),
            perf("'24 3Q", 16342.0, 1253.0, 7.7),
            perf("'24 4Q", 16575.0, 983.0, 5.9),
            perf("'25 1Q", 15993.0, 1034.0, 6.5),
            perf("'25 2Q", 17053.0, 1404.0, 8.2),
            perf("'25 3Q", 16228.0, 1173.0, 7.2),
        ],
        business_highlights: vec![
            Highlight {
                title: "3분기 실적".into(),
                subtitle: "계절적·일회성 요인 제외 시 견조한 흐름".into(),
                details: lines(&[
                    "(건재사업부) 전방산업의 침체 속 수익성 방어 노력 지속",
                    "(도료사업부) 자동차·선박 중심으로 매출액 및 수익성 유지",
                    "(실리콘사업부) 하절기 전방산업 약세 영향 있었으나, 공장 효율화 및 비용 절감 노력을 지속하며 수익성 개선 기반 마련",
                ]),
            },
            Highlight {
                title: "재무구조 안정화".into(),
                subtitle: "실리콘사업부(MPM) 유동성 개선".into(),
                details: lines(&[
                    "작년말 이후 보유 예금을 통한 상환(400M$), 올해 7월 타법인 주식을 활용한 EB발행을 통한 차환(650M$) 진행 완료",
                    "또한, '25년 10월 MPM 금융보증채 발행을 통한 리파이낸싱 진행 TLB 등 차입금을 통합하여 이자비용 절감",
                    "현재 MPM 차입금 700M$ + α 수준으로 개선",
                ]),
            },
            Highlight {
                title: "유기실리콘 동향".into(),
                subtitle: "(시장동향) 중국 유기실리콘 기업, 감산관련".into(),
                details: lines(&[
                    "12월부터 중국 업체 중심 가동률 감축 합의 진행 이슈 발생",
                    "실제로 직후 DMC 가격 +20%상승 (장기적으로 DMC 가격 상승 시, 기초 제품군 수익성 개선)",
                    "다만, 그간 과잉 공급 및 변동성으로 지속적인 모니터링 필요",
                ]),
            },
        ],
        indicator_history: vec![
            ind("2024 3Q", 131.3, 37.9, 40.8, 164.2),
            ind("2024 4Q", 123.6, 38.4, 39.6, 160.1),
            ind("2025 1Q", 136.7, 37.4, 41.6, 140.7),
            ind("2025 2Q", 120.5, 33.5, 45.3, 130.6),
            ind("2025 3Q", 98.4, 31.2, 46.0, 117.6),
        ],
        ir_support: lines(&[
            "IR 전용회선 ☎ 02-3480-5000 (교환 5)",
            "IR 전용 페이지 (kccworld.irpage.co.kr)",
            "IR 미팅 예약·Q&A 섹션 활용 가능",
            "IR 정보 통합 제공, 접근성 향상",
        ]),
        ir_action: lines(&[
            "해외 기관투자자 미팅 확대 ('24년 평균 2회/月 → '25년 평균 4회/月)",
            "연기금 IR 미팅 정례화 (연 1회이상)",
            "애널리스트 커버리지 확대 ('24년 4명 → '25년 8명)",
            "'25년도 IR 활동 관련 예정사항 (12월)",
            "- KCC IR BOOK(2024-25) 영문본 발간",
            "- 기업가치제고계획(2025) 영문본 발간",
            "- 기관투자자 대상 2025 IR 설문조사 진행",
            "- 그 외 IR Activities 다양화를 통한 투자자 접점 확대",
        ]),
    }
}

fn perf(quarter: &str, revenue: f64, operating_profit: f64, profit_rate: f64) -> PerformanceRow {
    PerformanceRow {
        quarter: quarter.into(),
        revenue,
        operating_profit,
        profit_rate,
    }
}

fn ind(
    quarter: &str,
    liquidity_ratio: f64,
    equity_ratio: f64,
    dependency_ratio: f64,
    debt_ratio: f64,
) -> IndicatorRow {
    IndicatorRow {
        quarter: quarter.into(),
        liquidity_ratio,
        equity_ratio,
        dependency_ratio,
        debt_ratio,
    }
}
