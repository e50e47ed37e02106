// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Rational approximants for the upper and lower quantiles.

use super::{ExpSegment, Rational, Segment};
use crate::kernels::scientific::distributions::shared::constants::exp2i;

/// Direct segments for `p ∈ [0.125, 0.5]`, highest first. Values are `x · p^(2/3)`.
pub(crate) const QUANTILE_UPPER: [Segment; 2] = [
    Segment {
        lower: 0.25,
        upper: 0.5,
        f: Rational {
            numer: &[
                0.19108820680322422,
                -0.9611152298593515,
                -14.224672962232553,
                -25.410766430134117,
                44.76088723349129,
                89.039580095705,
                -66.27237775448806,
                -66.26360563266302,
                39.071734390279936,
            ],
            denom: &[
                1.0,
                6.2020952566040775,
                4.942597077750139,
                -25.081121357950714,
                -22.333679497724837,
                39.52591260612791,
                13.528136650911085,
                -19.40660133487129,
                2.114380410680064,
            ],
        },
    },
    Segment {
        lower: 0.125,
        upper: 0.25,
        f: Rational {
            numer: &[
                0.42569244978507437,
                3.199268131245465,
                -14.47813053469721,
                -144.4098466377331,
                60.37612804743729,
                1699.4985756029164,
                1185.9185619401223,
                -2096.3623044655174,
            ],
            denom: &[
                1.0,
                11.15897017182134,
                14.345159204169336,
                -219.59661075121838,
                -686.2598870689088,
                58.80457212081242,
                881.2343042155084,
                -174.36930436808322,
            ],
        },
    },
];

/// Exponent buckets for `p ∈ [2^-48, 2^-3)`. Values are `x · p^(2/3)`.
pub(crate) const QUANTILE_UPPER_EXP: [ExpSegment; 5] = [
    ExpSegment {
        floor: exp2i(-4),
        rescale: exp2i(3),
        f: Rational {
            numer: &[
                0.42569244978507437,
                0.31096064026865267,
                0.0288562145016288,
                0.023302351784841566,
                0.005830408755778809,
                0.00035743918129958107,
                0.00015905761743366934,
                4.532643005953968e-06,
            ],
            denom: &[
                1.0,
                0.41479451257179545,
                0.10403911952101356,
                0.037966013128316635,
                0.008902638348750765,
                0.001418130272628389,
                0.00017897281176003726,
                1.5182580136066676e-05,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-8),
        rescale: exp2i(4),
        f: Rational {
            numer: &[
                0.5073410980452605,
                0.29685967005151925,
                0.16613138621174328,
                0.08084478242278174,
                0.024057677937918926,
                0.007876188944156164,
                0.0016264990388145338,
                0.00032008667177582304,
                4.245953721552372e-05,
                4.1938800130059225e-06,
                2.073670152480312e-07,
            ],
            denom: &[
                1.0,
                0.4988339598265605,
                0.3356726003476417,
                0.13759390127354307,
                0.047836600435596476,
                0.013746797794241903,
                0.003132871243626706,
                0.0005754131119093727,
                7.950353994803197e-05,
                7.687125196615981e-06,
                3.836942173720373e-07,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-16),
        rescale: exp2i(8),
        f: Rational {
            numer: &[
                0.5417746260944915,
                0.4238405301158704,
                0.15917277376971264,
                0.037894545240139445,
                0.00637542620125595,
                0.0007962853719215462,
                7.520492300667212e-05,
                5.353307964334038e-06,
                2.70230906321648e-07,
                9.075468521322311e-09,
                3.5749077966437906e-11,
            ],
            denom: &[
                1.0,
                0.7819316301403035,
                0.2937641497652284,
                0.06991751134521124,
                0.01176533815362603,
                0.0014692824618173412,
                0.00013877811265693548,
                9.878100647966885e-06,
                4.986546978540508e-07,
                1.6746592297686e-08,
                6.596750309674938e-11,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-32),
        rescale: exp2i(16),
        f: Rational {
            numer: &[
                0.5419260678269748,
                0.4560148443290084,
                0.18575289561526512,
                0.04857731738967973,
                0.009111755840868384,
                0.00129534372600579,
                0.00014346651438527748,
                1.2479733821048914e-05,
                8.437133481303733e-07,
                4.18495999139617e-08,
                1.4503857698965044e-09,
            ],
            denom: &[
                1.0,
                0.8414705772541946,
                0.3427642738882127,
                0.08963827359081024,
                0.016813651064113658,
                0.0023902591091641626,
                0.0002647344763594996,
                2.30284802817669e-05,
                1.5568790553473852e-06,
                7.722381745349293e-08,
                2.6763535652110223e-09,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-48),
        rescale: exp2i(32),
        f: Rational {
            numer: &[
                0.5419260701392891,
                0.5176892786925764,
                0.23874546914714379,
                0.05811088687763778,
                0.01824720414990986,
            ],
            denom: &[
                1.0,
                0.9552765722444703,
                0.4405498873412383,
                0.10723028486653499,
                0.0336710211140421,
            ],
        },
    },
];

/// Direct segments for `p ∈ [0.125, 0.5]`, highest first.
pub(crate) const QUANTILE_LOWER: [Segment; 3] = [
    Segment {
        lower: 0.375,
        upper: 0.5,
        f: Rational {
            numer: &[
                -1.1732607402047166,
                1.5213130909966914,
                11.986669347536663,
                -6.005510747741211,
                -22.02232470662387,
                7.242951423589776,
                4.770349200349982,
            ],
            denom: &[
                1.0,
                1.756970053196768,
                -4.892760058192001,
                -5.650611944490859,
                6.850776712148083,
                2.890182612100494,
                -1.4136008265196132,
            ],
        },
    },
    Segment {
        lower: 0.25,
        upper: 0.375,
        f: Rational {
            numer: &[
                -1.6328124092553131,
                -5.960604952917891,
                11.851061635041615,
                42.05716053602907,
                -16.881759359515403,
                -41.3556476365774,
                8.554871296433474,
            ],
            denom: &[
                1.0,
                6.0227732857593095,
                5.443375283992424,
                -16.10852137974325,
                -13.673108039808119,
                11.393763299629779,
                2.169167355741693,
            ],
        },
    },
    Segment {
        lower: 0.125,
        upper: 0.25,
        f: Rational {
            numer: &[
                -2.187651775723965,
                -36.79267198455112,
                -184.08209222282235,
                -132.16628308378364,
                906.8977016591632,
                959.1393637916523,
                -878.5913520257179,
                -254.7586381319663,
            ],
            denom: &[
                1.0,
                19.279136633104983,
                125.88092436929465,
                290.1802563296503,
                -8.363160270450848,
                -543.3001905697627,
                -68.92663955099462,
                125.27609775776669,
            ],
        },
    },
];

/// Exponent buckets for `p ∈ [2^-1024, 2^-3)`.
pub(crate) const QUANTILE_LOWER_EXP: [ExpSegment; 9] = [
    ExpSegment {
        floor: exp2i(-4),
        rescale: exp2i(3),
        f: Rational {
            numer: &[
                -2.187651775723965,
                -2.200468102710941,
                -0.7784147140724603,
                -0.11590652516992223,
                -0.006679836441592297,
                -9.815084076051228e-05,
            ],
            denom: &[
                1.0,
                0.7926467293443064,
                0.21787050445134515,
                0.024235191097351682,
                0.0009464491572085235,
                6.7144450315770785e-06,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-8),
        rescale: exp2i(4),
        f: Rational {
            numer: &[
                -2.5982239941038507,
                -2.9977080614115836,
                -1.4282383225650432,
                -0.3640111120890588,
                -0.05373042032975483,
                -0.004647106847192671,
                -0.00022720590748318467,
                -5.727535875469523e-06,
                -6.134744824283736e-08,
                -1.7305465903511836e-10,
            ],
            denom: &[
                1.0,
                1.0135105347286386,
                0.42234591628801277,
                0.09343736645641973,
                0.011828610292836021,
                0.0008610352130766205,
                3.437004864701531e-05,
                6.707086772094262e-07,
                4.979051082436784e-09,
                6.835802953353161e-12,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-16),
        rescale: exp2i(8),
        f: Rational {
            numer: &[
                -3.6735436538069757,
                -1.636279160423604,
                -0.28477682070204946,
                -0.02451000979826793,
                -0.0010876645447674541,
                -2.3545729311041496e-05,
                -2.0901073798702805e-07,
                -4.767909855832288e-10,
            ],
            denom: &[
                1.0,
                0.3889293930420356,
                0.058317183811966454,
                0.0042376336763507065,
                0.00015377722331243014,
                2.576524222582251e-06,
                1.5814763679927277e-08,
                1.7470716290899348e-11,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-32),
        rescale: exp2i(16),
        f: Rational {
            numer: &[
                -4.921878195106367,
                -1.071552417247939,
                -0.091301092867612,
                -0.0038528656133512084,
                -8.395227347273782e-05,
                -8.936681937400377e-07,
                -3.9068030347303385e-09,
                -4.3965157511043555e-12,
            ],
            denom: &[
                1.0,
                0.19283960820107968,
                0.014330066998885095,
                0.0005158054088446915,
                9.267003145225799e-06,
                7.683119233915885e-08,
                2.3323615188093595e-10,
                1.273559327816905e-13,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-64),
        rescale: exp2i(32),
        f: Rational {
            numer: &[
                -6.414435506382912,
                -0.7801542347805447,
                -0.03838909352614343,
                -0.000980682975885781,
                -1.3879737888867679e-05,
                -1.0753326766246455e-07,
                -4.21286320571044e-10,
                -6.929414850260763e-13,
                -2.979625360809107e-16,
            ],
            denom: &[
                1.0,
                0.11008858114812911,
                0.004843302272639879,
                0.00010880558588051568,
                1.3231486937936887e-06,
                8.506884202365802e-09,
                2.6105496007931498e-11,
                2.996914267133086e-14,
                6.2812240551039996e-18,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-128),
        rescale: exp2i(64),
        f: Rational {
            numer: &[
                -8.235008063632336,
                -0.5555575948236315,
                -0.015548555145388505,
                -0.00023374374768183237,
                -2.042748704001693e-06,
                -1.0497335403548238e-08,
                -3.059841869295481e-11,
                -4.61435794911836e-14,
                -2.967180917198996e-17,
                -5.044620627778384e-21,
            ],
            denom: &[
                1.0,
                0.06194289616137733,
                0.0015761263596608451,
                2.1269956008754632e-05,
                1.6407268588106553e-07,
                7.269209369678536e-10,
                1.7639958089745106e-12,
                2.0901414069012662e-15,
                9.40941948642175e-19,
                7.821714998560062e-23,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-256),
        rescale: exp2i(128),
        f: Rational {
            numer: &[
                -10.484557063194403,
                -0.27685411637739815,
                -0.0028649067871592045,
                -1.4703422818194695e-05,
                -3.902244868509268e-08,
                -5.067823071157326e-11,
                -2.707956041470813e-14,
                -3.732917609298442e-18,
            ],
            denom: &[
                1.0,
                0.0237151115915042,
                0.00021661633173524096,
                9.579475475614287e-07,
                2.1136531921035765e-09,
                2.151492806094828e-12,
                8.017419773978015e-16,
                5.3736072551819494e-20,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-512),
        rescale: exp2i(256),
        f: Rational {
            numer: &[
                -13.28658272261757,
                -0.2222221549339751,
                -0.0015422291761709684,
                -5.750406681846708e-06,
                -1.2467565939451678e-08,
                -1.5899162433051235e-11,
                -1.1504225348202823e-14,
                -4.308094766285033e-18,
                -6.881875098508049e-22,
                -2.907893798614238e-26,
            ],
            denom: &[
                1.0,
                0.015399265135523478,
                9.740502643469437e-05,
                3.267509013188615e-07,
                6.265139779195701e-10,
                6.899520297287333e-13,
                4.1616985061704497e-16,
                1.225767373185563e-19,
                1.3717924157469227e-23,
                2.835094030874475e-28,
            ],
        },
    },
    ExpSegment {
        floor: exp2i(-1024),
        rescale: exp2i(512),
        f: Rational {
            numer: &[
                -16.793718658382236,
                -0.11009607437630631,
                -0.0002829095717011578,
                -3.606418545684481e-07,
                -2.378004413488038e-10,
                -7.675383552058126e-14,
                -1.0196845888575222e-17,
                -3.496339074852587e-22,
            ],
            denom: &[
                1.0,
                0.005898160577225421,
                1.339891333072938e-05,
                1.4737088985062834e-08,
                8.08746866233566e-12,
                2.047679800784804e-15,
                1.898260383821644e-19,
                3.165654681173315e-24,
            ],
        },
    },
];
