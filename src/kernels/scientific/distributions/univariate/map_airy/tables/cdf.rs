// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Rational approximants for the tail probabilities `P(X > u)` and `P(X < -v)`.

use super::{Rational, Segment};

/// Segments on `u ∈ [0, 64]`, evaluated at `u - lower`.
pub(crate) const CDF_PLUS: [Segment; 7] = [
    Segment {
        lower: 0.0,
        upper: 1.0,
        f: Rational {
            numer: &[
                0.3333333333333333,
                0.04915440293394613,
                0.03395702920470071,
                0.004209452240377232,
                0.0009787680573064455,
                6.221890237750851e-05,
                4.098761239114173e-06,
                -9.925850086605428e-08,
            ],
            denom: &[
                1.0,
                0.740011724343414,
                0.3852911502022819,
                0.12617637594360304,
                0.0316701571136386,
                0.005516130986106381,
                0.0006793525950165412,
                4.7832510612412526e-05,
            ],
        },
    },
    Segment {
        lower: 1.0,
        upper: 2.0,
        f: Rational {
            numer: &[
                0.18419697058101595,
                0.01603885912050006,
                0.01392172845959914,
                0.00017869334899908238,
                0.00018415428202360769,
                -6.234343679278865e-06,
                2.8536152587213936e-07,
            ],
            denom: &[
                1.0,
                0.6639094103882209,
                0.26219087133721164,
                0.06071418767192806,
                0.00949132133232285,
                0.000823101936615142,
                3.99738994551386e-05,
            ],
        },
    },
    Segment {
        lower: 2.0,
        upper: 4.0,
        f: Rational {
            numer: &[
                0.10740927339752412,
                0.06601220929946505,
                0.022673215368970247,
                0.00487609587263011,
                0.0006266978418216255,
                4.8663878834644765e-05,
                9.214548157497251e-07,
                -6.47054411264029e-09,
            ],
            denom: &[
                1.0,
                1.1116029092457878,
                0.5951378204247804,
                0.19608517221637656,
                0.04267622200668322,
                0.006137905402331549,
                0.0005415258830934861,
                2.2912184103142464e-05,
            ],
        },
    },
    Segment {
        lower: 4.0,
        upper: 8.0,
        f: Rational {
            numer: &[
                0.04707201995352288,
                0.03347993657685952,
                0.011834520908524061,
                0.0025088550500486618,
                0.000341108293818,
                2.9084349084010204e-05,
                1.4339215463478448e-06,
                3.140844642141794e-08,
                1.3798540035054422e-10,
                -2.572104433612684e-13,
            ],
            denom: &[
                1.0,
                1.0489244031576264,
                0.5169653170321493,
                0.15489016579079973,
                0.03075991373224544,
                0.004149354440000107,
                0.0003741754499198895,
                2.1185593786927632e-05,
                6.485519492109295e-07,
                7.083799726472175e-09,
            ],
        },
    },
    Segment {
        lower: 8.0,
        upper: 16.0,
        f: Rational {
            numer: &[
                0.0174847564444513,
                0.009379044854659733,
                0.002030088579012145,
                0.0002236339449822945,
                1.2835094929171078e-05,
                3.5178265839947217e-07,
                3.688006471435583e-09,
                7.385758041017824e-12,
                -6.4186767168020685e-15,
            ],
            denom: &[
                1.0,
                0.7208690844481304,
                0.22107728391054327,
                0.03729044479862977,
                0.0037220762616897926,
                0.000219410899512484,
                7.161647605680955e-06,
                1.1090629012013566e-07,
                5.617740456973032e-10,
            ],
        },
    },
    Segment {
        lower: 16.0,
        upper: 32.0,
        f: Rational {
            numer: &[
                0.006226841031705632,
                0.0015780987471773883,
                0.0001621451578361561,
                8.610862557358616e-06,
                2.5056962581130686e-07,
                3.920282808423263e-09,
                3.0157553232291934e-11,
                9.202428962310457e-14,
                5.591964397819362e-17,
                -1.5396645247584684e-20,
            ],
            denom: &[
                1.0,
                0.34698595955940364,
                0.051219774564326824,
                0.004175903714790366,
                0.00020430431293044912,
                6.103420746141937e-06,
                1.0848320406685982e-07,
                1.0663244226418895e-09,
                4.97814980839718e-12,
                7.680100925685937e-15,
            ],
        },
    },
    Segment {
        lower: 32.0,
        upper: 64.0,
        f: Rational {
            numer: &[
                0.0022035714572703614,
                0.00017492886603896746,
                5.092699731346425e-06,
                6.706201989467955e-08,
                3.961512472082668e-10,
                8.806743746557127e-13,
                3.779086342157335e-16,
                -7.209585252452369e-20,
            ],
            denom: &[
                1.0,
                0.12624674298646313,
                0.006397661490479347,
                0.00016590868028465875,
                2.3233258994341716e-06,
                1.698637267283807e-08,
                5.698977473445732e-11,
                6.19477290437728e-14,
            ],
        },
    },
];

/// Tail beyond `u = 64`, evaluated at `w = u^(-3/2) ∈ (0, 1/512]`.
pub(crate) const CDF_PLUS_LIMIT: Rational = Rational {
    numer: &[
        0.3989422804014327,
        6.755709640342942e-05,
        21.55437602493911,
        0.0007913002268915389,
        115.88688083580271,
    ],
    denom: &[
        1.0,
        0.00016934052799680847,
        58.40380838614092,
        0.00272436033232107,
        475.6191813514739,
    ],
};

/// Direct segments on `v = -u ∈ [0, 2]`.
pub(crate) const CDF_MINUS: [Segment; 2] = [
    Segment {
        lower: 0.0,
        upper: 1.0,
        f: Rational {
            numer: &[
                0.6666666666666666,
                -0.6863889586450678,
                0.33099397191540025,
                -0.10486638125488758,
                0.024279704945437398,
                -0.004008614115326075,
                0.00045672651732579957,
                -3.7092208672666837e-05,
                1.860881903935959e-06,
            ],
            denom: &[
                1.0,
                -0.7333091801968139,
                0.3567667178712202,
                -0.10845692619074797,
                0.025090766173341286,
                -0.003969553371402589,
                0.0004817833098638053,
                -3.437547656997547e-05,
                2.032662100174837e-06,
            ],
        },
    },
    Segment {
        lower: 1.0,
        upper: 2.0,
        f: Rational {
            numer: &[
                0.4232389984496711,
                -0.5597617531914059,
                0.3219300549990171,
                -0.11069870724818384,
                0.027245578352024614,
                -0.005160703578681815,
                0.0006631022063716034,
                -4.019193137323121e-05,
            ],
            denom: &[
                1.0,
                -0.6684211175504424,
                0.3559632475126509,
                -0.11345438383842443,
                0.029494034635892678,
                -0.005075508086971092,
                0.0006573209188694674,
                -4.3027863005954005e-05,
            ],
        },
    },
];

/// Scaled segments on `v ∈ (2, 32]`; the caller applies the tail factor.
pub(crate) const CDF_MINUS_TAIL: [Segment; 4] = [
    Segment {
        lower: 2.0,
        upper: 4.0,
        f: Rational {
            numer: &[
                0.5881761894760565,
                0.6035266420248744,
                0.2583080322739259,
                0.07193346417785894,
                0.012539545131111678,
                0.0013797207849403496,
                7.351051338477728e-05,
                6.158298116353809e-07,
            ],
            denom: &[
                1.0,
                0.9563067411147291,
                0.47648556481925486,
                0.1468056236232065,
                0.03019660996551899,
                0.0039948615347151105,
                0.00031182052364400303,
                8.14482745213512e-06,
            ],
        },
    },
    Segment {
        lower: 4.0,
        upper: 8.0,
        f: Rational {
            numer: &[
                0.5514727576436735,
                0.5517980957075954,
                0.2532474791223167,
                0.06969235080306391,
                0.01240323372686865,
                0.0014390885869145593,
                0.00010353969684567204,
                3.993788703133977e-06,
                5.827319747489915e-08,
                1.24875070891165e-10,
            ],
            denom: &[
                1.0,
                1.073979181327958,
                0.5401397421687927,
                0.16428002181452922,
                0.032824776259530744,
                0.0043865360100524735,
                0.0003807762907678356,
                1.9589712267461972e-05,
                4.775128823077656e-07,
                3.2489294300521e-09,
            ],
        },
    },
    Segment {
        lower: 8.0,
        upper: 16.0,
        f: Rational {
            numer: &[
                0.4180657377423326,
                0.20220069804688098,
                0.0398614740971677,
                0.003988972866650003,
                0.00020465893725911364,
                4.798728591516924e-06,
                3.8766728081856296e-08,
                4.513550368808418e-11,
            ],
            denom: &[
                1.0,
                0.5417664241939716,
                0.12228427987999174,
                0.014503598432518238,
                0.0009378716558454029,
                3.091641983076646e-05,
                4.302198682057431e-07,
                1.5913427957699457e-09,
            ],
        },
    },
    Segment {
        lower: 16.0,
        upper: 32.0,
        f: Rational {
            numer: &[
                0.2987432662035279,
                0.11405632219834333,
                0.01569938131208694,
                0.0010394399093823232,
                3.5565389825412784e-05,
                6.156002314042712e-07,
                4.839751622076708e-09,
                1.3253423856946671e-11,
                5.358702208912911e-15,
            ],
            denom: &[
                1.0,
                0.41274761343696653,
                0.06391042460217686,
                0.004943068915168346,
                0.00020702883904959044,
                4.675269416370188e-06,
                5.287850486427001e-08,
                2.508568565017876e-10,
                3.194564945732131e-13,
            ],
        },
    },
];
